use crate::{AiError, AiResult, TickContext};

/// Something the entity layer ticks once per frame: a behavior tree, a utility driver, or any
/// custom brain.
pub trait Agent: 'static {
    fn tick(&mut self, time: &TickContext) -> AiResult<()>;
}

/// Tick every agent in order.
///
/// An agent whose tick fails is skipped for the rest of the frame; the remaining agents still
/// tick. Returns the index and error of each failed agent.
pub fn tick_agents(time: &TickContext, agents: &mut [Box<dyn Agent>]) -> Vec<(usize, AiError)> {
    let mut failed = Vec::new();
    for (i, agent) in agents.iter_mut().enumerate() {
        if let Err(err) = agent.tick(time) {
            tracing::warn!(agent = i, tick = time.tick, error = %err, "agent tick aborted");
            failed.push((i, err));
        }
    }
    failed
}
