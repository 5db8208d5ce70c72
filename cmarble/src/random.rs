use rand::{thread_rng, Rng, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub fn seeded(seed: u64) -> Random {
    Random::seed_from_u64(seed)
}

/// Picks a fresh seed and returns it together with the generator, so the
/// caller can report the seed and reproduce the run later.
pub fn from_entropy_seed() -> (u64, Random) {
    let seed = thread_rng().gen();
    (seed, seeded(seed))
}

/// Source of randomness for the maze generator.
///
/// Only [`RandomSource::gen_index`] has to be provided, shuffling is built on
/// top of it, so two sources yielding the same indices shuffle identically.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn gen_index(&mut self, bound: usize) -> usize;

    /// Fisher-Yates shuffle, drawing one index per remaining element.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        let mut counter = items.len();
        while counter > 0 {
            let idx = self.gen_index(counter);
            counter -= 1;
            items.swap(counter, idx);
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Wraps another source and writes down every index it hands out.
#[derive(Debug, Clone)]
pub struct RecordingRandom<R> {
    inner: R,
    draws: Vec<usize>,
}

impl<R: RandomSource> RecordingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            draws: Vec::new(),
        }
    }

    pub fn draws(&self) -> &[usize] {
        &self.draws
    }

    pub fn into_replay(self) -> ReplayRandom {
        ReplayRandom::new(self.draws)
    }
}

impl<R: RandomSource> RandomSource for RecordingRandom<R> {
    fn gen_index(&mut self, bound: usize) -> usize {
        let idx = self.inner.gen_index(bound);
        self.draws.push(idx);
        idx
    }
}

/// Hands out a fixed list of indices.
///
/// Each value is reduced modulo the requested bound. After the list runs out
/// it starts over from the beginning, an empty list always yields zero.
#[derive(Debug, Clone)]
pub struct ReplayRandom {
    draws: Vec<usize>,
    next: usize,
}

impl ReplayRandom {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, next: 0 }
    }

    /// How many indices were handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ReplayRandom {
    fn gen_index(&mut self, bound: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }

        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % bound
    }
}
