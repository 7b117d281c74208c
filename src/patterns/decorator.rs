//! Decorator: `RedShapeDecorator` adds a red border to any `Shape`
//! without touching the shape's own type.

use crate::PatternResult;
use crate::output::OutputSink;

pub trait Shape {
    fn draw(&self, sink: &mut dyn OutputSink) -> PatternResult<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Circle;

impl Shape for Circle {
    fn draw(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        sink.line("Shape: Circle")?;
        Ok(())
    }
}

/// Draws the wrapped shape, then its red border
pub struct RedShapeDecorator {
    decorated_shape: Box<dyn Shape>,
}

impl RedShapeDecorator {
    pub fn new(decorated_shape: Box<dyn Shape>) -> Self {
        Self { decorated_shape }
    }

    fn set_red_border(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        sink.line("Border Color: Red")?;
        Ok(())
    }
}

impl Shape for RedShapeDecorator {
    fn draw(&self, sink: &mut dyn OutputSink) -> PatternResult<()> {
        self.decorated_shape.draw(sink)?;
        self.set_red_border(sink)
    }
}

/// Draws a plain circle, then one with a red border
pub fn run_demo(sink: &mut dyn OutputSink) -> PatternResult<()> {
    let circle: Box<dyn Shape> = Box::new(Circle);
    let red_circle: Box<dyn Shape> = Box::new(RedShapeDecorator::new(Box::new(Circle)));

    sink.line("Circle with normal border")?;
    circle.draw(sink)?;

    sink.line("")?;
    sink.line("Circle with red border")?;
    red_circle.draw(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferSink;

    #[test]
    fn test_plain_circle() {
        let mut sink = BufferSink::new();
        Circle.draw(&mut sink).unwrap();
        assert_eq!(sink.lines(), ["Shape: Circle"]);
    }

    #[test]
    fn test_red_circle() {
        let red_circle = RedShapeDecorator::new(Box::new(Circle));
        let mut sink = BufferSink::new();

        red_circle.draw(&mut sink).unwrap();

        assert_eq!(sink.lines(), ["Shape: Circle", "Border Color: Red"]);
    }

    #[test]
    fn test_decorators_stack() {
        let shape: Box<dyn Shape> = Box::new(RedShapeDecorator::new(Box::new(
            RedShapeDecorator::new(Box::new(Circle)),
        )));
        let mut sink = BufferSink::new();

        shape.draw(&mut sink).unwrap();

        assert_eq!(
            sink.lines(),
            ["Shape: Circle", "Border Color: Red", "Border Color: Red"]
        );
    }
}
