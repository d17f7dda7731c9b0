mod clock;

pub use clock::TokioClock;
