mod score;

pub use score::run;
