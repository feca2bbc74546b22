use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kodi_bridge::call::{assemble_builtin_call, FunctionReference};
use kodi_bridge::escape::{escape_arguments, Argument, EscapeFlags};

fn bench_escape_arguments(c: &mut Criterion) {
    let args: Vec<Argument> = vec![
        "Now playing: \"Track\"\nby Artist".into(),
        42.into(),
        2.5.into(),
        true.into(),
        Argument::variable("Variables['player']"),
        Argument::Null,
        Argument::Null,
    ];
    let flags = EscapeFlags::QUOTES | EscapeFlags::STRIP_NULL_ITEMS;
    c.bench_function("escape mixed arguments", |b| {
        b.iter(|| escape_arguments(black_box(&args), flags))
    });
}

fn bench_builtin_call(c: &mut Criterion) {
    let dispatcher = FunctionReference::builtin_dispatcher();
    let args = ["Title, with comma", "Body text", "5000"];
    c.bench_function("assemble builtin call", |b| {
        b.iter(|| assemble_builtin_call(&dispatcher, "Notification", black_box(&args)))
    });
}

criterion_group!(benches, bench_escape_arguments, bench_builtin_call);
criterion_main!(benches);
