//! Coordinate bounds validation

use crate::{SmsError, SmsHeader};

/// Validate that `(row, col)` addresses a cell of the declared matrix
///
/// The terminator coordinates are not accepted here; callers test for the
/// terminator first.
pub const fn validate_coordinates(
    header: &SmsHeader,
    row: usize,
    col: usize,
) -> Result<(), SmsError> {
    if row < 1 || row > header.nrows {
        return Err(SmsError::RowOutOfRange {
            row,
            nrows: header.nrows,
        });
    }
    if col < 1 || col > header.ncols {
        return Err(SmsError::ColumnOutOfRange {
            col,
            ncols: header.ncols,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinates() {
        let header = SmsHeader::new(4, 2);

        assert_eq!(validate_coordinates(&header, 1, 1), Ok(()));
        assert_eq!(validate_coordinates(&header, 4, 2), Ok(()));

        assert_eq!(
            validate_coordinates(&header, 5, 1),
            Err(SmsError::RowOutOfRange { row: 5, nrows: 4 })
        );
        assert_eq!(
            validate_coordinates(&header, 0, 1),
            Err(SmsError::RowOutOfRange { row: 0, nrows: 4 })
        );
        assert_eq!(
            validate_coordinates(&header, 2, 3),
            Err(SmsError::ColumnOutOfRange { col: 3, ncols: 2 })
        );
    }
}
