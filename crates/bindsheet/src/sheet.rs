//! Run orchestration: legend, binding rows, column layout.
//!
//! Each block (the symbol legend, the binding list) is rendered into a
//! [`LineBuffer`] in full, then laid out in columns sized to its widest
//! line plus the configured spacing. Nothing of a block is written before
//! all of it has been rendered.

use crate::config::Config;
use crate::directive::RowDirective;
use crate::error::SheetError;
use crate::format::{format_binding, format_description, format_row, BindingStyle};
use crate::heading::HeadingStyle;
use crate::record::{read_records, BindingRecord};
use crate::tables::{key_legend, MODIFIERS};
use bindsheet_render::{ColumnLayout, LineBuffer};
use std::io::{self, Read, Write};
use tracing::debug;

/// Level of the headings the sheet itself emits.
const SECTION_LEVEL: u8 = 1;

pub const MODIFIER_HEADING: &str = "Modifier key symbols:";
pub const KEYS_HEADING: &str = "Other keyboard symbols:";
pub const BINDINGS_HEADING: &str = "Key-bindings:";

/// Renders binding records into a column-formatted cheat sheet.
#[derive(Debug, Clone)]
pub struct CheatSheet {
    config: Config,
    headings: HeadingStyle,
    binding_style: BindingStyle,
}

impl CheatSheet {
    pub fn new(config: Config) -> Self {
        let headings = HeadingStyle::new(config.color.enabled());
        Self {
            config,
            headings,
            binding_style: BindingStyle::default(),
        }
    }

    fn row(&self, binding: &str, description: &str) -> String {
        format_row(
            binding,
            description,
            self.config.bind_width,
            self.config.desc_width,
        )
    }

    fn section(&self, buf: &mut LineBuffer, title: &str) {
        buf.push(self.headings.render(title, SECTION_LEVEL));
    }

    /// The modifier and key symbol legend.
    pub fn legend(&self) -> LineBuffer {
        let mut buf = LineBuffer::new();

        self.section(&mut buf, MODIFIER_HEADING);
        for (glyph, name) in MODIFIERS.iter() {
            buf.push(self.row(glyph, name));
        }
        buf.push_blank();

        self.section(&mut buf, KEYS_HEADING);
        for (glyph, name) in key_legend() {
            buf.push(self.row(glyph, name));
        }
        buf.push_blank();

        buf
    }

    /// Appends the lines for one record: any blank line or heading its
    /// directive asks for, then the row itself. Skipped records add nothing.
    pub fn push_record(&self, buf: &mut LineBuffer, record: &BindingRecord) {
        let directive = RowDirective::interpret(&record.description);
        let Some(description) = directive.description() else {
            debug!(key = %record.key, "skipping row");
            return;
        };

        if directive.blank_line_before() {
            buf.push_blank();
        }
        if let Some(heading) = directive.heading() {
            buf.push(self.headings.render(&heading.title, heading.level));
        }

        let binding = format_binding(&record.key, record.modmask, &self.binding_style);
        let description = format_description(&record.arg, description, &record.dispatcher);
        buf.push(self.row(&binding, &description));
    }

    /// The binding list, headed by its section title.
    pub fn bindings(&self, records: &[BindingRecord]) -> LineBuffer {
        let mut buf = LineBuffer::new();
        self.section(&mut buf, BINDINGS_HEADING);
        for record in records {
            self.push_record(&mut buf, record);
        }
        buf
    }

    /// Column layout for `block`: cells as wide as its widest line plus spacing.
    pub fn layout_for(&self, block: &LineBuffer) -> ColumnLayout {
        let column_width = block.longest_visible_width() + self.config.spacing;
        let layout = ColumnLayout::new(column_width, self.config.width);
        debug!(
            lines = block.len(),
            column_width,
            columns = layout.columns(),
            rows = layout.rows(block.len()),
            "laying out block"
        );
        layout
    }

    /// Lays out `block` in columns and writes it to `output`.
    pub fn write_block<W: Write>(&self, block: &LineBuffer, output: &mut W) -> io::Result<()> {
        self.layout_for(block).write_to(block.lines(), output)
    }

    /// Writes the whole sheet, reading binding records from `input`.
    ///
    /// Input is only read when the binding list is shown.
    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<(), SheetError> {
        writeln!(output)?;

        if self.config.show_legend {
            self.write_block(&self.legend(), output)?;
        }

        if !self.config.hide_bindings {
            let records = read_records(input)?;
            debug!(records = records.len(), "decoded binding records");
            self.write_block(&self.bindings(&records), output)?;
        }

        output.flush()?;
        Ok(())
    }

    /// Renders the whole sheet to a string.
    pub fn render<R: Read>(&self, input: R) -> Result<String, SheetError> {
        let mut out = Vec::new();
        self.run(input, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn plain() -> CheatSheet {
        CheatSheet::new(Config::default().color(ColorChoice::Never))
    }

    fn lines_for(sheet: &CheatSheet, record: BindingRecord) -> Vec<String> {
        let mut buf = LineBuffer::new();
        sheet.push_record(&mut buf, &record);
        buf.into_lines()
    }

    #[test]
    fn test_push_record_plain_row() {
        let record = BindingRecord::new("a", 64, "exec").description("Open terminal");
        assert_eq!(lines_for(&plain(), record), vec!["❖ a     Open terminal"]);
    }

    #[test]
    fn test_push_record_skip() {
        let record = BindingRecord::new("a", 64, "exec").description("!skip anything");
        assert!(lines_for(&plain(), record).is_empty());
    }

    #[test]
    fn test_push_record_break() {
        let record = BindingRecord::new("a", 64, "exec").description("!br Title");
        assert_eq!(lines_for(&plain(), record), vec!["", "❖ a     Title"]);
    }

    #[test]
    fn test_push_record_heading() {
        let record = BindingRecord::new("a", 64, "exec").description("!h Heading: Rest");
        assert_eq!(lines_for(&plain(), record), vec!["Heading", "❖ a     Rest"]);
    }

    #[test]
    fn test_push_record_dispatcher_template() {
        let record = BindingRecord::new("left", 64, "movefocus").arg("l");
        assert_eq!(lines_for(&plain(), record), vec!["❖ ◀     Move focus left"]);
    }

    #[test]
    fn test_legend_contents() {
        let legend = plain().legend();
        let lines = legend.lines();
        assert_eq!(lines[0], MODIFIER_HEADING);
        assert_eq!(lines[1], "⇧       Shift");
        assert_eq!(lines[8], "ᴳ       Alt Gr");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], KEYS_HEADING);
        assert_eq!(lines[11], "⨯❭      Delete");
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_bindings_block_starts_with_heading() {
        let block = plain().bindings(&[]);
        assert_eq!(block.lines(), &[BINDINGS_HEADING.to_string()]);
    }

    #[test]
    fn test_layout_uses_longest_plus_spacing() {
        let sheet = CheatSheet::new(
            Config::default()
                .color(ColorChoice::Never)
                .spacing(3)
                .width(50),
        );
        let mut block = LineBuffer::new();
        block.extend(["abc", "abcdefg"]);
        let layout = sheet.layout_for(&block);
        assert_eq!(layout.column_width(), 10);
        assert_eq!(layout.columns(), 5);
    }

    #[test]
    fn test_write_block_pads_every_cell() {
        let sheet = CheatSheet::new(Config::default().color(ColorChoice::Never).width(12));
        let mut block = LineBuffer::new();
        block.extend(["ab", "abcd", "x"]);
        let mut out = Vec::new();
        sheet.write_block(&block, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab    x     \nabcd  \n");
    }

    #[test]
    fn test_run_hidden_bindings_does_not_read_input() {
        let sheet = CheatSheet::new(Config::default().hide_bindings(true));
        // Not valid JSON, but never read
        assert_eq!(sheet.render("{".as_bytes()).unwrap(), "\n");
    }
}
