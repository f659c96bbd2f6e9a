use bootcfg::parser::{get_bootconfig_from_str, parse_cmdline};
use criterion::{criterion_group, criterion_main, Criterion};

fn make_cmdline() -> String {
    let mut cmdline = String::from("console=ttyS0,115200 quiet");
    for i in 0..100 {
        cmdline.push_str(&format!(" androidboot.param{i}=\"value {i}\""));
    }
    cmdline
}

fn make_bootconfig() -> String {
    let mut bootconfig = String::new();
    for i in 0..100 {
        bootconfig.push_str(&format!("androidboot.param{i} = \"a{i}\", \"b{i}\"\n"));
    }
    bootconfig
}

fn bench_cmdline(c: &mut Criterion) {
    let cmdline = make_cmdline();
    c.bench_function("parse_cmdline", |b| b.iter(|| parse_cmdline(&cmdline)));
}

fn bench_bootconfig(c: &mut Criterion) {
    let bootconfig = make_bootconfig();
    c.bench_function("bootconfig_lookup_last", |b| {
        b.iter(|| get_bootconfig_from_str(&bootconfig, "androidboot.param99"))
    });
}

criterion_group!(benches, bench_cmdline, bench_bootconfig);
criterion_main!(benches);
