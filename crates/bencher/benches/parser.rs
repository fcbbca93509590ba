use std::hint::black_box;
use bencher::{TestCase, TestFile};
use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_head::codec::{HeadDecoder, HeadParser};
use tokio_util::codec::Decoder;

static SMALL_HEADER: TestFile = TestFile::new("get_small.txt", include_str!("../resources/request/get_small.txt"));
static LARGE_HEADER: TestFile = TestFile::new("get_large.txt", include_str!("../resources/request/get_large.txt"));

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::small(SMALL_HEADER.file_name(), SMALL_HEADER), TestCase::large(LARGE_HEADER.file_name(), LARGE_HEADER)]
}

fn benchmark_head_parser(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("head_parser");
    let parser = HeadParser::new();

    for case in test_cases {
        let content = case.bytes();
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new(case.group().as_str(), case.name()), content, |b, content| {
            b.iter(|| {
                let request = parser.parse(black_box(content), content.len()).expect("input should be a valid request head");
                black_box(request);
            });
        });
    }

    group.finish();
}

fn benchmark_head_decoder(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("head_decoder");

    for case in test_cases {
        group.throughput(Throughput::Bytes(case.file().content().len() as u64));
        group.bench_with_input(BenchmarkId::new(case.group().as_str(), case.name()), &case, |b, case| {
            let mut head_decoder = HeadDecoder::new();
            b.iter_batched_ref(
                || BytesMut::from(case.file().content()),
                |bytes_mut| {
                    let request = head_decoder.decode(bytes_mut).expect("input should be a valid request head").unwrap();
                    black_box(request);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(parser, benchmark_head_parser, benchmark_head_decoder);
criterion_main!(parser);
