use std::fmt;
use std::str::FromStr;

/// The text inputs of the form, named after their HTML `name` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    OrganizationName,
    ContactPerson,
    Email,
    Phone,
    NumStudents,
    GradeLevel,
    Reason,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::OrganizationName,
        FormField::ContactPerson,
        FormField::Email,
        FormField::Phone,
        FormField::NumStudents,
        FormField::GradeLevel,
        FormField::Reason,
    ];

    /// The `name` attribute used by the rendered input.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::OrganizationName => "organizationName",
            FormField::ContactPerson => "contactPerson",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::NumStudents => "numStudents",
            FormField::GradeLevel => "gradeLevel",
            FormField::Reason => "reason",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown form field: {}", s))
    }
}

/// Current values of every input. `Default` is the blank form shown on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub organization_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub num_students: String,
    pub grade_level: String,
    pub reason: String,
    pub confirmed: bool,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::OrganizationName => &self.organization_name,
            FormField::ContactPerson => &self.contact_person,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::NumStudents => &self.num_students,
            FormField::GradeLevel => &self.grade_level,
            FormField::Reason => &self.reason,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::OrganizationName => &mut self.organization_name,
            FormField::ContactPerson => &mut self.contact_person,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::NumStudents => &mut self.num_students,
            FormField::GradeLevel => &mut self.grade_level,
            FormField::Reason => &mut self.reason,
        };
        *slot = value;
    }
}

/// A document picked for upload. Only its public URL is ever persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Text after the last `.` of the file name, or the whole name when it
    /// has no dot.
    pub fn extension(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Lenient integer parse used for the student count.
///
/// Skips leading whitespace, accepts one optional sign and reads the leading
/// run of ASCII digits, ignoring whatever follows (`"12 kids"` is 12, `"3.7"`
/// is 3). Returns `None` when no digit is found or the value overflows.
/// No bounds are applied.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>(), Ok(field));
        }
        assert!("confirmed".parse::<FormField>().is_err());
        assert!("organization_name".parse::<FormField>().is_err());
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut fields = FormFields::default();
        fields.set(FormField::Phone, "555-0100".into());
        fields.set(FormField::Phone, "555-0199".into());

        assert_eq!(fields.get(FormField::Phone), "555-0199");
        assert_eq!(fields.get(FormField::Email), "");
        assert!(!fields.confirmed);
    }

    #[test]
    fn leading_int_parse() {
        assert_eq!(parse_leading_int("25"), Some(25));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12 kids"), Some(12));
        assert_eq!(parse_leading_int("3.7"), Some(3));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+9"), Some(9));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(SelectedFile::new("report.final.pdf", vec![]).extension(), "pdf");
        assert_eq!(SelectedFile::new("photo.JPG", vec![]).extension(), "JPG");
        assert_eq!(SelectedFile::new("README", vec![]).extension(), "README");
        assert_eq!(SelectedFile::new("archive.", vec![]).extension(), "");
    }
}
