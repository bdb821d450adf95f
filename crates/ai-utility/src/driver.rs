use ai_core::{diagnostics::report, Agent, AiError, AiResult, Sensor, Sensors, TickContext};

use crate::Reasoner;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityAiConfig {
    /// Seconds between decision cycles. Must be finite and positive.
    pub update_period: f32,
}

impl Default for UtilityAiConfig {
    fn default() -> Self {
        Self { update_period: 0.2 }
    }
}

/// Owns a context and a reasoner and runs one select-then-execute cycle per elapsed period.
///
/// The accumulator starts at the period. Each tick subtracts the frame delta and then, while the
/// accumulator is `<= 0`, adds the period back and runs one cycle. A long frame therefore runs
/// several cycles back to back, each one reading the context as the previous cycle left it.
///
/// Sensors run once per tick, in order, before the first cycle of that tick.
pub struct UtilityAi<C: 'static> {
    context: C,
    reasoner: Reasoner<C>,
    sensors: Sensors<C>,
    config: UtilityAiConfig,
    elapsed: f32,
}

impl<C: 'static> UtilityAi<C> {
    pub fn new(context: C, reasoner: Reasoner<C>) -> Self {
        Self::with_config(context, reasoner, UtilityAiConfig::default())
    }

    pub fn with_config(context: C, reasoner: Reasoner<C>, config: UtilityAiConfig) -> Self {
        Self {
            context,
            reasoner,
            sensors: Sensors::new(),
            config,
            elapsed: config.update_period,
        }
    }

    pub fn with_sensor(mut self, sensor: impl Sensor<C>) -> Self {
        self.add_sensor(sensor);
        self
    }

    pub fn add_sensor(&mut self, sensor: impl Sensor<C>) {
        self.sensors.push(sensor);
    }

    /// Advance by `time.dt_seconds` and return how many decision cycles ran.
    ///
    /// A delta that is negative or not finite, or so large that adding the period back to the
    /// accumulator no longer changes it, is rejected and leaves the accumulator untouched.
    pub fn tick(&mut self, time: &TickContext) -> AiResult<u32> {
        let period = self.config.update_period;
        if !period.is_finite() || period <= 0.0 {
            return Err(report(AiError::precondition(format!(
                "utility update period must be positive, got {period}"
            ))));
        }
        let dt = time.dt_seconds;
        if !dt.is_finite() || dt < 0.0 {
            return Err(report(AiError::precondition(format!(
                "utility frame delta must be finite and non-negative, got {dt}"
            ))));
        }
        let remaining = self.elapsed - dt;
        if remaining + period == remaining {
            return Err(report(AiError::precondition(format!(
                "utility frame delta {dt} is too large for update period {period}"
            ))));
        }

        self.sensors.sense(time, &mut self.context)?;

        self.elapsed = remaining;
        let mut cycles = 0;
        while self.elapsed <= 0.0 {
            self.elapsed += period;
            cycles += 1;
            if let Some(action) = self.reasoner.select(&self.context) {
                action.execute(&mut self.context)?;
            }
        }

        if cycles > 1 {
            tracing::debug!(tick = time.tick, cycles, "utility ai caught up");
        }
        Ok(cycles)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn config(&self) -> UtilityAiConfig {
        self.config
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn reasoner(&self) -> &Reasoner<C> {
        &self.reasoner
    }

    pub fn reasoner_mut(&mut self) -> &mut Reasoner<C> {
        &mut self.reasoner
    }
}

impl<C: 'static> Agent for UtilityAi<C> {
    fn tick(&mut self, time: &TickContext) -> AiResult<()> {
        UtilityAi::tick(self, time).map(|_| ())
    }
}
