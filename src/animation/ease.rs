/// One ease-toward step: `current + (target - current) * rate`.
pub fn ease_toward(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}

/// Outcome of [`AnimatedScalar::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseStep {
    /// The value moved toward its target.
    Moved,
    /// The value is exactly at its target (after a snap, or already there).
    Settled,
}

/// Scalar that approaches its target geometrically, one fixed fraction per frame.
///
/// Without a snap epsilon the value approaches the target asymptotically and never reaches it.
/// With one, the value is forced to the target once it is within the epsilon, which is what the
/// window width needs to stop issuing resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedScalar {
    current: f64,
    target: f64,
    rate: f64,
    snap: Option<f64>,
}

impl AnimatedScalar {
    /// Value resting at `value`; `rate` is clamped into `(0, 1]`.
    pub fn new(value: f64, rate: f64) -> Self {
        Self {
            current: value,
            target: value,
            rate: rate.clamp(f64::EPSILON, 1.0),
            snap: None,
        }
    }

    pub fn with_snap(mut self, epsilon: f64) -> Self {
        self.snap = Some(epsilon.abs());
        self
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and make it the new target.
    pub fn reset(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    /// Advance one frame.
    pub fn step(&mut self) -> EaseStep {
        match self.snap {
            Some(eps) if (self.current - self.target).abs() <= eps => {
                self.current = self.target;
                EaseStep::Settled
            }
            _ if self.current == self.target => EaseStep::Settled,
            _ => {
                self.current = ease_toward(self.current, self.target, self.rate);
                EaseStep::Moved
            }
        }
    }

    /// Retarget and advance one frame, returning the new value.
    pub fn step_toward(&mut self, target: f64) -> f64 {
        self.set_target(target);
        self.step();
        self.current
    }

    /// Hover helper: ease toward 1 while `active`, else toward 0.
    pub fn step_hover(&mut self, active: bool) -> f64 {
        self.step_toward(if active { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
