mod string;

pub use string::SecString;
