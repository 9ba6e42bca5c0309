// Domain layer: the conversion contracts. Concrete implementations live with callers.

pub mod ports;
