// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use awalbp_model::instance::Instance;
use awalbp_model::loading::InstanceLoader;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fmt::Write as _;
use std::hint::black_box;

/// Builds a syntactically valid instance with `num_tasks` tasks assigned
/// round-robin over `num_stations` workstations, so the assignment checksum
/// holds by construction. Requires `num_tasks >= num_stations`.
fn synth_instance(num_tasks: usize, num_stations: usize) -> String {
    let mut out = String::new();
    writeln!(out, "{}", num_tasks).unwrap();
    writeln!(out, "{}", num_stations).unwrap();

    let left: Vec<String> = (0..num_stations).map(|_| "0".to_owned()).collect();
    writeln!(out, "{}", left.join(" ")).unwrap();
    let right: Vec<String> = (0..num_stations).map(|_| "100".to_owned()).collect();
    writeln!(out, "{}", right.join(" ")).unwrap();

    writeln!(out, "100").unwrap(); // size of workpiece
    writeln!(out, "5").unwrap(); // distance between right borders
    writeln!(out, "2").unwrap(); // intermediate time between stages
    writeln!(out, "1").unwrap(); // elementary step length

    let tasks: Vec<String> = (1..=num_tasks).map(|t| t.to_string()).collect();
    writeln!(out, "{}", tasks.join(" ")).unwrap();

    for station in 0..num_stations {
        let assigned: Vec<String> = (1..=num_tasks)
            .filter(|t| (t - 1) % num_stations == station)
            .map(|t| t.to_string())
            .collect();
        writeln!(out, "{}", assigned.join(" ")).unwrap();
    }

    let times: Vec<String> = (0..num_tasks).map(|_| "1".to_owned()).collect();
    writeln!(out, "{}", times.join(" ")).unwrap();
    let borders: Vec<String> = (0..num_tasks).map(|t| (t % 100).to_string()).collect();
    writeln!(out, "{}", borders.join(" ")).unwrap();

    out
}

fn bench_loader(c: &mut Criterion) {
    let loader = InstanceLoader::new();
    let mut group = c.benchmark_group("instance_loading");

    for &(num_tasks, num_stations) in &[(10usize, 2usize), (100, 5), (1000, 10)] {
        let data = synth_instance(num_tasks, num_stations);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", num_tasks, num_stations)),
            &data,
            |b, data| {
                b.iter(|| {
                    let instance: Instance<i64> =
                        loader.from_str(black_box(data)).expect("valid instance");
                    instance
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_loader);
criterion_main!(benches);
