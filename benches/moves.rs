use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use lib::checkers::{Board, Color, Pos};

const CYCLE: &str = "......../\
                     ..r.r.../\
                     ......../\
                     ..r.r.../\
                     ......../\
                     ..r.r.../\
                     .B....../\
                     ........";

fn moves(c: &mut Criterion) {
    let boards = [
        ("standard", Board::default(), Color::Black),
        ("cycle", CYCLE.parse().unwrap(), Color::Black),
    ];

    let mut group = c.benchmark_group("benches");
    group.throughput(Throughput::Elements(1));

    for (name, board, color) in &boards {
        group.bench_function(format!("moves/{name}"), |b| {
            b.iter(|| board.moves(*color));
        });
    }

    group.bench_function("play/cycle", |b| {
        let board: Board = CYCLE.parse().unwrap();
        b.iter_batched_ref(
            || board.clone(),
            |b| b.play(Pos::new(6, 1), Pos::new(6, 5), Color::Black),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, moves);
criterion_main!(benches);
