use crate::color::encode::device_word;
use crate::foundation::core::LED_COUNT;
use crate::foundation::error::HexResult;
use crate::frame::buffer::Frame;
use crate::geometry::lut::PixelMap;

/// Device color words, indexed by LED.
pub type LedBuffer = [u32; LED_COUNT];

/// Consumer of projected frames, typically an LED strip driver.
pub trait LedSink {
    /// Stage one full buffer of device words.
    fn write_leds(&mut self, leds: &LedBuffer) -> HexResult<()>;
    /// Push the staged buffer out to the hardware.
    fn render(&mut self) -> HexResult<()>;
}

/// Map `frame` onto the strip.
///
/// The buffer starts zeroed and only populated cells write into it, so no value from an
/// earlier frame can survive.
pub fn project_frame(frame: &Frame, map: &PixelMap) -> LedBuffer {
    let mut leds = [0u32; LED_COUNT];
    for (x, y, led) in map.populated() {
        if let Some(px) = frame.pixel(x, y) {
            leds[led.as_usize()] = device_word(px);
        }
    }
    leds
}

/// Project `frame`, hand it to `sink` and render it.
pub fn send_frame(frame: &Frame, map: &PixelMap, sink: &mut dyn LedSink) -> HexResult<()> {
    let leds = project_frame(frame, map);
    sink.write_leds(&leds)?;
    sink.render()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    staged: Option<LedBuffer>,
    rendered: Vec<LedBuffer>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers in the order they were rendered.
    pub fn rendered(&self) -> &[LedBuffer] {
        &self.rendered
    }
}

impl LedSink for InMemorySink {
    fn write_leds(&mut self, leds: &LedBuffer) -> HexResult<()> {
        self.staged = Some(*leds);
        Ok(())
    }

    fn render(&mut self) -> HexResult<()> {
        if let Some(leds) = self.staged {
            self.rendered.push(leds);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
