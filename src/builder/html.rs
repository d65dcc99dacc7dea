//! Host page for web builds.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::fs::write_string;

/// Minimal page that attaches the compiled module to a full-window canvas.
///
/// The canvas id and the `Module.canvas` hookup are what the SDL2 port looks
/// for; `{script}` is replaced with the module file name.
const HOST_PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en-us">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Lumina</title>
    <style>
      html, body { margin: 0; padding: 0; height: 100%; overflow: hidden; background: #000; }
      canvas { display: block; width: 100vw; height: 100vh; }
    </style>
  </head>
  <body>
    <canvas id="canvas" oncontextmenu="event.preventDefault()" tabindex=-1></canvas>
    <script type="text/javascript">
      var Module = {
        canvas: (function() { return document.getElementById("canvas"); })()
      };
    </script>
    <script async type="text/javascript" src="{script}"></script>
  </body>
</html>
"#;

/// A synthesized HTML document embedding a compiled module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPage {
    file_name: String,
    contents: String,
}

impl HostPage {
    /// Render the host page for the module `script_name`.
    pub fn new(file_name: impl Into<String>, script_name: &str) -> Self {
        HostPage {
            file_name: file_name.into(),
            contents: HOST_PAGE_TEMPLATE.replace("{script}", script_name),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Write the page into `output_dir`, returning its path.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(&self.file_name);
        write_string(&path, &self.contents)?;
        Ok(path)
    }
}
