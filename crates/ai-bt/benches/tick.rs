use ai_bt::{BehaviorTree, BtNode, Condition, Sequence};
use ai_core::{Blackboard, Clock, TickContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn not_blocked(_time: &TickContext, bb: &Blackboard) -> bool {
    bb.get::<bool>("blocked").map(|b| !b).unwrap_or(true)
}

fn bench_bt_tick(c: &mut Criterion) {
    let conditions = (0..32)
        .map(|_| Box::new(Condition::node(not_blocked)) as Box<dyn BtNode<Blackboard>>)
        .collect::<Vec<_>>();

    let mut blackboard = Blackboard::new();
    blackboard.set("blocked", false);
    let mut tree = BehaviorTree::new(Sequence::new(conditions), blackboard);
    let mut clock = Clock::new();

    c.bench_function("ai-bt/tick(conditions=32)", |b| {
        b.iter(|| {
            let status = tree.tick(&clock.advance(0.016));
            black_box(status.ok());
        })
    });
}

criterion_group!(benches, bench_bt_tick);
criterion_main!(benches);
