use ai_core::{
    derive_seed, tick_agents, Agent, AiError, AiResult, Clock, RandomSource, SplitMix64,
    TickContext,
};

#[test]
fn clock_accumulates_elapsed_time() {
    let mut clock = Clock::new();

    let first = clock.advance(0.25);
    assert_eq!(first, TickContext::new(0, 0.25, 0.25));

    let second = clock.advance(0.5);
    assert_eq!(second.tick, 1);
    assert_eq!(second.dt_seconds, 0.5);
    assert_eq!(second.elapsed_seconds, 0.75);
    assert_eq!(clock.elapsed_seconds(), 0.75);
}

#[test]
fn split_mix_is_deterministic_and_unit_samples_are_in_range() {
    let mut a = SplitMix64::new(derive_seed(42, 7, 0));
    let mut b = SplitMix64::new(derive_seed(42, 7, 0));
    let mut other = SplitMix64::new(derive_seed(42, 8, 0));

    let xs = (0..64).map(|_| a.next_unit_f32()).collect::<Vec<_>>();
    let ys = (0..64).map(|_| b.next_unit_f32()).collect::<Vec<_>>();
    let zs = (0..64).map(|_| other.next_unit_f32()).collect::<Vec<_>>();

    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
    assert!(xs.iter().all(|x| (0.0..1.0).contains(x)));
}

struct Counter {
    ticks: u32,
    fail_on: Option<u64>,
}

impl Agent for Counter {
    fn tick(&mut self, time: &TickContext) -> AiResult<()> {
        if self.fail_on == Some(time.tick) {
            return Err(AiError::precondition("scripted failure"));
        }
        self.ticks += 1;
        Ok(())
    }
}

#[test]
fn failing_agent_does_not_stop_siblings() {
    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(Counter {
            ticks: 0,
            fail_on: None,
        }),
        Box::new(Counter {
            ticks: 0,
            fail_on: Some(0),
        }),
        Box::new(Counter {
            ticks: 0,
            fail_on: None,
        }),
    ];

    let mut clock = Clock::new();
    let failed = tick_agents(&clock.advance(0.1), &mut agents);
    assert_eq!(
        failed,
        vec![(1, AiError::Precondition("scripted failure".to_string()))]
    );

    let failed = tick_agents(&clock.advance(0.1), &mut agents);
    assert!(failed.is_empty());
}
