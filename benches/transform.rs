use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratechart::loader::SampleTable;
use ratechart::summary::RateSummary;
use ratechart::transform::RateTable;

/// Build a JSON log shaped like the client export (one record per second)
fn make_log(num_samples: usize) -> String {
    let records: Vec<String> = (0..num_samples)
        .map(|s| {
            let bytes = 1_048_576 + (s % 97) * 65_536;
            format!(
                "{{\"RateBits\": {}, \"Bytes\": {}, \"Second\": {}, \"Packets\": {}, \"RateBytes\": {}}}",
                bytes * 8,
                bytes,
                s,
                bytes / 1350,
                bytes
            )
        })
        .collect();
    format!("[{}]", records.join(",\n"))
}

/// Benchmark parsing JSON records into the sample table
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for num_samples in [60, 3_600, 86_400] {
        let json = make_log(num_samples);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}samples", num_samples)),
            &json,
            |b, json| {
                b.iter(|| black_box(SampleTable::from_json_str(json).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark deriving RateMBps and summarizing
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for num_samples in [3_600, 86_400] {
        let samples = SampleTable::from_json_str(&make_log(num_samples)).unwrap();
        group.throughput(Throughput::Elements(num_samples as u64));

        group.bench_with_input(
            BenchmarkId::new("rate_mbps", num_samples),
            &samples,
            |b, samples| {
                b.iter(|| black_box(RateTable::from_samples(samples).unwrap()));
            },
        );

        let table = RateTable::from_samples(&samples).unwrap();
        group.bench_with_input(BenchmarkId::new("summary", num_samples), &table, |b, table| {
            b.iter(|| black_box(RateSummary::from_table(table)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_transform);
criterion_main!(benches);
