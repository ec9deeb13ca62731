//! Text form of [`MultiIntVector`]: one `(i0,...,in)` tuple per block.
//!
//! Blocks are written in block order separated by a single space. The
//! reader accepts any ASCII whitespace between tuples. This is a
//! debugging and logging format, not a stable interchange format.

use std::fmt;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

use blockvec_core::IntVector;

use crate::error::MultiVectorError;
use crate::layout::BlockLayout;
use crate::multi_vector::{check_uniform_dim, MultiIntVector};

impl fmt::Display for MultiIntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Split `text` into per-block tuples and parse each one.
fn parse_blocks(text: &str) -> Result<Vec<IntVector>, MultiVectorError> {
    let mut blocks = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let end = rest.find(')').map_or(rest.len(), |i| i + 1);
        let (tuple, tail) = rest.split_at(end);
        blocks.push(tuple.parse::<IntVector>()?);
        rest = tail.trim_start();
    }
    check_uniform_dim(&blocks)?;
    Ok(blocks)
}

impl FromStr for MultiIntVector {
    type Err = MultiVectorError;

    /// Parse without consulting a layout. Blank text yields an empty vector.
    ///
    /// No layout sees the result, so its block count is not raised. Use
    /// [`MultiIntVector::parse_with`] for vectors that will be combined
    /// with ones built from a layout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            blocks: parse_blocks(s)?,
        })
    }
}

impl MultiIntVector {
    /// Parse `text`, raising `layout`'s block count if it holds more blocks.
    pub fn parse_with(layout: &BlockLayout, text: &str) -> Result<Self, MultiVectorError> {
        let blocks = parse_blocks(text)?;
        layout.ratchet(blocks.len());
        Ok(Self { blocks })
    }

    /// Read one line from `reader` and parse it with [`parse_with`](Self::parse_with).
    ///
    /// Returns `MultiVectorError::Io` with `UnexpectedEof` if the reader is
    /// already exhausted.
    pub fn read_from<R: BufRead>(
        layout: &BlockLayout,
        mut reader: R,
    ) -> Result<Self, MultiVectorError> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(MultiVectorError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "no multi-block vector to read",
            )));
        }
        Self::parse_with(layout, &line)
    }

    /// Write the text form followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MultiVectorError> {
        writeln!(writer, "{self}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockvec_core::{CoreError, Dimension};
    use blockvec_test_utils::iv;
    use std::io::Cursor;

    #[test]
    fn display_writes_blocks_in_order() {
        let layout = BlockLayout::new(2);
        let v = MultiIntVector::from_blocks(&layout, vec![iv(&[1, 2]), iv(&[-3, 4])]);
        assert_eq!(v.to_string(), "(1,2) (-3,4)");
    }

    #[test]
    fn display_of_empty_is_blank() {
        let mut v = MultiIntVector::new(iv(&[1]));
        v.clear();
        assert_eq!(v.to_string(), "");
        assert!("  ".parse::<MultiIntVector>().unwrap().is_empty());
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let v: MultiIntVector = " (1, 2)\t( 3,4 )(5,6) ".parse().unwrap();
        assert_eq!(v.blocks(), &[iv(&[1, 2]), iv(&[3, 4]), iv(&[5, 6])]);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["(1,2) x", "(1,2", "1,2", "(1,2) (3,x)"] {
            let result = bad.parse::<MultiIntVector>();
            assert!(
                matches!(result, Err(MultiVectorError::Parse(CoreError::Parse { .. }))),
                "{bad:?} parsed as {result:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_mixed_dimensions() {
        let result = "(1,2) (1,2,3)".parse::<MultiIntVector>();
        assert!(matches!(result, Err(MultiVectorError::DimensionMismatch { .. })));
    }

    #[test]
    fn parse_with_ratchets_layout() {
        let layout = BlockLayout::new(1);
        let v = MultiIntVector::parse_with(&layout, "(1) (2) (3) (4)").unwrap();
        assert_eq!(v.block_count(), 4);
        assert_eq!(layout.block_count(), 4);
    }

    #[test]
    fn only_parse_with_raises_layout() {
        let layout = BlockLayout::new(2);
        let detached: MultiIntVector = "(1) (2) (3) (4)".parse().unwrap();
        assert_eq!(detached.block_count(), 4);
        assert_eq!(layout.block_count(), 2);

        let attached = MultiIntVector::parse_with(&layout, &detached.to_string()).unwrap();
        assert_eq!(attached, detached);
        assert_eq!(layout.block_count(), 4);
        let ones = MultiIntVector::uniform(&layout, Dimension::ONE, 1);
        assert!(ones.all_le(&attached));
    }

    #[test]
    fn write_then_read() {
        let v = MultiIntVector::filled(&BlockLayout::new(3), Dimension::THREE, 2, 3);
        let mut buf = Vec::new();
        v.write_to(&mut buf).unwrap();
        assert_eq!(buf, b"(2,2,2) (2,2,2) (2,2,2)\n");

        let layout = BlockLayout::new(1);
        let mut reader = Cursor::new(buf);
        let back = MultiIntVector::read_from(&layout, &mut reader).unwrap();
        assert_eq!(back, v);
        assert_eq!(layout.block_count(), 3);

        let eof = MultiIntVector::read_from(&layout, &mut reader).unwrap_err();
        assert!(matches!(eof, MultiVectorError::Io(e) if e.kind() == ErrorKind::UnexpectedEof));
    }

    #[test]
    fn read_reports_bad_line() {
        let layout = BlockLayout::new(1);
        let err = MultiIntVector::read_from(&layout, Cursor::new("(1,2\n")).unwrap_err();
        assert!(matches!(err, MultiVectorError::Parse(_)));
        assert!(err.to_string().starts_with("parse: "));
    }
}
