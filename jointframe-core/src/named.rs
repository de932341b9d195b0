use crate::RotationMatrix;

/// A matrix object with a human readable label.
///
/// The label only serves diagnostics and never takes part in computation.
pub trait Orientation {
    /// Label of the matrix object, for example `R_02`.
    fn name(&self) -> &str;

    /// Orientation of the object.
    fn matrix(&self) -> &RotationMatrix;

    /// Borrow the object as a printable named matrix.
    fn named(&self) -> NamedMatrix<'_> {
        NamedMatrix::new(self.name(), self.matrix())
    }

    /// Print the matrix in handwritten form.
    ///
    /// Entries are written at full precision unless `precision` is given.
    fn print_matrix(
        &self,
        writer: &mut dyn std::io::Write,
        precision: Option<usize>,
    ) -> std::io::Result<()> {
        match precision {
            Some(precision) => writeln!(writer, "{:.*}", precision, self.named()),
            None => writeln!(writer, "{}", self.named()),
        }
    }
}

/// Label and matrix pair for diagnostic output.
///
/// Formats as a `Printing: <name>` header, one row per line and a trailing
/// blank separator line. The formatter precision is passed on to the rows.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NamedMatrix<'a> {
    name: &'a str,
    matrix: &'a RotationMatrix,
}

impl<'a> NamedMatrix<'a> {
    pub fn new(name: &'a str, matrix: &'a RotationMatrix) -> Self {
        Self { name, matrix }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    #[inline]
    pub fn matrix(&self) -> &RotationMatrix {
        self.matrix
    }
}

impl std::fmt::Display for NamedMatrix<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Printing: {}", self.name)?;
        match f.precision() {
            Some(precision) => writeln!(f, "{:.*}", precision, self.matrix)?,
            None => writeln!(f, "{}", self.matrix)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Base(RotationMatrix);

    impl Orientation for Base {
        fn name(&self) -> &str {
            "R_00"
        }

        fn matrix(&self) -> &RotationMatrix {
            &self.0
        }
    }

    #[test]
    fn test_named_display() {
        let base = Base(RotationMatrix::identity());

        assert_eq!(
            base.named().to_string(),
            "Printing: R_00\n[1, 0, 0]\n[0, 1, 0]\n[0, 0, 1]\n"
        );
    }

    #[test]
    fn test_named_display_precision() {
        let base = Base(RotationMatrix::identity());

        assert_eq!(
            format!("{:.1}", base.named()),
            "Printing: R_00\n[1.0, 0.0, 0.0]\n[0.0, 1.0, 0.0]\n[0.0, 0.0, 1.0]\n"
        );
    }

    #[test]
    fn test_print_matrix() {
        let base = Base(RotationMatrix::identity());

        let mut buffer = Vec::new();
        base.print_matrix(&mut buffer, None).unwrap();
        base.print_matrix(&mut buffer, Some(1)).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Printing: R_00\n[1, 0, 0]\n[0, 1, 0]\n[0, 0, 1]\n\n\
             Printing: R_00\n[1.0, 0.0, 0.0]\n[0.0, 1.0, 0.0]\n[0.0, 0.0, 1.0]\n\n"
        );
    }

    #[test]
    fn test_print_matrix_through_trait_object() {
        let base = Base(RotationMatrix::identity());
        let objects: Vec<&dyn Orientation> = vec![&base, &base];

        let mut buffer = Vec::new();
        for object in &objects {
            object.print_matrix(&mut buffer, Some(0)).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.matches("Printing: R_00").count(), 2);
    }

    #[test]
    fn test_named_serialize() {
        let matrix = RotationMatrix::identity();
        let json = serde_json::to_string(&NamedMatrix::new("R_00", &matrix)).unwrap();

        assert_eq!(
            json,
            r#"{"name":"R_00","matrix":[[1.0,0.0,0.0],[0.0,1.0,0.0],[0.0,0.0,1.0]]}"#
        );
    }
}
