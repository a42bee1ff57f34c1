
use ::cgmath::{Vector2, Vector3};

pub trait Position {
    fn position(&self) -> Vector3<f64>;
}

impl Position for Vector3<f64> {
    fn position(&self) -> Vector3<f64> {
        *self
    }
}

pub trait Texcoords {
    fn texcoords(&self) -> Vector2<f64>;
}
