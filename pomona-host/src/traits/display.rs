//! Segment display and indicator control

/// Named indicator glyphs on the segment LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Hourly signal glyph
    Signal,
    /// Bell glyph, used by faces with a running alarm or timer
    Bell,
    /// PM glyph for 12-hour time
    Pm,
    /// 24H glyph
    Hour24,
    /// Lap glyph
    Lap,
}

/// Write-only sink for the segment display
pub trait DisplaySink {
    /// Render a short string verbatim, starting at a digit position.
    ///
    /// Text past the end of the display is clipped by the driver.
    fn display_string(&mut self, text: &str, position: u8);
}

/// Boolean indicator glyphs and the seconds colon
pub trait IndicatorControl {
    /// Show an indicator glyph
    fn set_indicator(&mut self, indicator: Indicator);

    /// Hide an indicator glyph
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Show the colon between the minutes and seconds digits
    fn set_colon(&mut self);

    /// Hide the colon
    fn clear_colon(&mut self);
}
