use std::collections::VecDeque;
/// Default number of samples kept on screen.
pub const WINDOW_CAPACITY: usize = 300;
/// Fixed-length rolling window of the newest samples.
///
/// The window is zero-filled at construction, so its length always equals its
/// capacity. Every push evicts exactly one sample from the front.
#[derive(Clone, Debug)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}
impl SampleWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        }
    }
    /// Appends a sample and drops the oldest one.
    pub fn push(&mut self, value: f64) {
        self.samples.pop_front();
        self.samples.push_back(value);
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
    /// Owned copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
    /// `[x, y]` pairs ready for `egui_plot::PlotPoints`.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
            .collect()
    }
}
impl Default for SampleWindow {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn starts_full_of_zeros() {
        let window = SampleWindow::default();
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert!(window.iter().all(|v| v == 0.0));
    }
    #[test]
    fn push_is_one_in_one_out() {
        let mut window = SampleWindow::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            window.push(v);
            assert_eq!(window.len(), 3);
        }
        assert_eq!(window.snapshot(), vec![2.0, 3.0, 4.0]);
        assert_eq!(window.latest(), Some(4.0));
    }
    #[test]
    fn zero_capacity_is_clamped() {
        let mut window = SampleWindow::new(0);
        window.push(5.0);
        assert_eq!(window.len(), 1);
        assert_eq!(window.snapshot(), vec![5.0]);
    }
}
