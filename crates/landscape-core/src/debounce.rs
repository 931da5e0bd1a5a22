/// Coalesces bursts of events so only the last one in a window acts.
///
/// Each event takes a ticket from [`Coalescer::schedule`]; when its timer
/// fires, the ticket is only honoured if no newer event arrived meanwhile.
#[derive(Clone, Debug)]
pub struct Coalescer {
    window_ms: u32,
    generation: u64,
}

impl Coalescer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            generation: 0,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}
