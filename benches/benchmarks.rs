criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_decision_key,
        looking_up_recorded_decision,
        looking_up_missing_decision,
        looking_up_typed_decision,
        loading_decision_table,
}

use rbp_decisions::Arbitrary;
use rbp_decisions::cards::*;
use rbp_decisions::decisions::*;

const N: usize = 0x4000;

fn table() -> DecisionTable {
    (0..N).map(|_| DecisionRecord::random()).collect()
}

fn building_decision_key(c: &mut criterion::Criterion) {
    c.bench_function("normalize an unsorted Key", |b| {
        b.iter(|| Key::from(("7D,7C", "TH,QS,KH,8C")))
    });
}

fn looking_up_recorded_decision(c: &mut criterion::Criterion) {
    let ref table = table();
    let record = table.iter().next().cloned().expect("non-empty table");
    c.bench_function("lookup a recorded decision", |b| {
        b.iter(|| table.lookup(record.cards(), record.board()))
    });
}

fn looking_up_missing_decision(c: &mut criterion::Criterion) {
    let ref table = table();
    c.bench_function("lookup a missing decision", |b| {
        b.iter(|| table.lookup("A", "B"))
    });
}

fn looking_up_typed_decision(c: &mut criterion::Criterion) {
    let ref table = table();
    let mut deck = Deck::new();
    let cards = deck.deal(2);
    let board = deck.deal(5);
    c.bench_function("decide from Hands", |b| {
        b.iter(|| table.decide(&cards, &board))
    });
}

fn loading_decision_table(c: &mut criterion::Criterion) {
    let ref mut buffer = Vec::new();
    table().write(&mut *buffer).expect("write to memory");
    let ref config = Config::default();
    c.bench_function("load a 16K-row decision table", |b| {
        b.iter(|| DecisionTable::from_reader(buffer.as_slice(), config))
    });
}
