// Fixed-delay debouncing driven by a caller-supplied millisecond clock

#[derive(Debug, Copy, Clone)]
pub struct Debounce<T> {
    pub value: T,
    delay_ms: u64,
    measured_value: T,
    measured_at: u64,
}

impl<T> Debounce<T>
where
    T: Clone + PartialEq<T>,
{
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            value: initial.clone(),
            delay_ms,
            measured_value: initial,
            measured_at: 0,
        }
    }

    /// Feed a sample taken at `now_ms`.
    /// Returns true when the stable value changes.
    pub fn measure(&mut self, value: T, now_ms: u64) -> bool {
        if self.measured_value != value {
            self.measured_value = value;
            self.measured_at = now_ms;

            return false;
        }

        let settled = now_ms.saturating_sub(self.measured_at) >= self.delay_ms;
        if self.measured_value != self.value && settled {
            self.value = value;

            return true;
        }

        false
    }
}
