/// An XML declaration (`<?xml ...?>`).
pub struct Declaration<'a> {
    /// The XML version.
    version: &'a str,
    /// The document encoding.
    encoding: &'a str,
    /// The standalone status, if stated.
    standalone: Option<bool>,
}

impl<'a> Declaration<'a> {
    pub fn new(version: &'a str, encoding: &'a str) -> Self {
        Declaration {
            version,
            encoding,
            standalone: None,
        }
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    pub fn write<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_fmt(format_args!(
            "<?xml version=\"{}\" encoding=\"{}\"",
            self.version, self.encoding
        ))?;
        if let Some(standalone) = self.standalone {
            let s = if standalone { "yes" } else { "no" };
            w.write_fmt(format_args!(" standalone=\"{s}\""))?;
        }
        w.write_all(b"?>")?;
        Ok(())
    }
}

impl std::fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"<?xml version="{}" encoding="{}""#,
            self.version, self.encoding
        )?;

        if let Some(standalone) = self.standalone {
            let s = if standalone { "yes" } else { "no" };
            write!(f, r#" standalone="{s}""#)?;
        }

        write!(f, "?>")?;
        Ok(())
    }
}
