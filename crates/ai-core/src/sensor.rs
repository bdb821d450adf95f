use crate::{AiResult, TickContext};

/// Pushes observations into an agent's context before the agent decides.
///
/// Closures `FnMut(&TickContext, &mut C) -> AiResult<()>` are sensors.
pub trait Sensor<C>: 'static {
    fn sense(&mut self, time: &TickContext, context: &mut C) -> AiResult<()>;
}

impl<C, F> Sensor<C> for F
where
    F: FnMut(&TickContext, &mut C) -> AiResult<()> + 'static,
{
    fn sense(&mut self, time: &TickContext, context: &mut C) -> AiResult<()> {
        self(time, context)
    }
}

/// Ordered sensors owned by a driver.
pub struct Sensors<C> {
    sensors: Vec<Box<dyn Sensor<C>>>,
}

impl<C: 'static> Sensors<C> {
    pub fn new() -> Self {
        Self {
            sensors: Vec::new(),
        }
    }

    pub fn push(&mut self, sensor: impl Sensor<C>) {
        self.sensors.push(Box::new(sensor));
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Run every sensor in registration order. The first failure stops the pass.
    pub fn sense(&mut self, time: &TickContext, context: &mut C) -> AiResult<()> {
        for (i, sensor) in self.sensors.iter_mut().enumerate() {
            if let Err(err) = sensor.sense(time, context) {
                tracing::debug!(sensor = i, tick = time.tick, error = %err, "sensor failed");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<C: 'static> Default for Sensors<C> {
    fn default() -> Self {
        Self::new()
    }
}
