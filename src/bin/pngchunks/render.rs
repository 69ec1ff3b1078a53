//! Turns scanned chunks into report lines.

use std::path::Path;

use pngchunks::{png::*, DecodeError};

const BLUE: &str = "\x1b[96m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Text of this many bytes or more is cut short unless verbose.
const SNIP_LEN: usize = 1024;

pub const SEPARATOR: &str = "--------------------";

/// How the report should look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
  /// List every chunk, and never snip text.
  pub verbose: bool,
  /// Use ANSI colors.
  pub color: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
  opts: RenderOptions,
}
impl Renderer {
  pub const fn new(opts: RenderOptions) -> Self {
    Self { opts }
  }

  fn paint(&self, color: &str, s: impl core::fmt::Display) -> String {
    if self.opts.color {
      format!("{color}{s}{RESET}")
    } else {
      s.to_string()
    }
  }

  /// Valid `IDAT` chunks are only listed when verbose.
  pub fn should_show(&self, scanned: &ScannedChunk<'_>) -> bool {
    self.opts.verbose || scanned.raw.chunk_type() != PngChunkType::IDAT || !scanned.is_valid()
  }

  pub fn chunk_line(&self, raw: &PngRawChunk<'_>) -> String {
    let ty = raw.chunk_type();
    let crc = format!("{:08X}", raw.declared_crc());
    let size = raw.total_len();
    let offset = raw.offset();
    if raw.is_crc_valid() {
      format!(
        "PNGChunk (type: {} at offset {offset:#08x}, size {size:#04x} (CRC32:{})",
        self.paint(BLUE, ty),
        self.paint(GREEN, crc)
      )
    } else {
      let at = format!("at offset {offset:#08x}, size {size:#04x}");
      self.paint(RED, format!("CRC32 ERROR # PNGChunk (type: {ty} {at} (CRC32:{crc})"))
    }
  }

  pub fn decode_error(&self, e: &DecodeError) -> String {
    self.paint(RED, format!("Decode error: {e}"))
  }

  pub fn past_end_warning(&self) -> String {
    self.paint(RED, "WARNING: Data past IEND block")
  }

  pub fn summary(&self, file_len: usize, path: &Path, chunk_count: usize) -> String {
    format!(
      "{} byte PNG file {} containing {chunk_count} chunks.",
      with_thousands(file_len),
      path.display()
    )
  }

  /// Length is counted in stored bytes. UTF-8 text is cut back to the start
  /// of a character, Latin-1 can be cut anywhere.
  fn text_line(&self, raw: &[u8], utf8: bool) -> String {
    let show = |bytes: &[u8]| {
      if utf8 {
        String::from_utf8_lossy(bytes).into_owned()
      } else {
        latin1_to_string(bytes)
      }
    };
    if self.opts.verbose || raw.len() < SNIP_LEN {
      return format!("Text: {}", show(raw));
    }
    let mut cut = SNIP_LEN;
    while utf8 && cut > 0 && matches!(raw.get(cut), Some(b) if b & 0xC0 == 0x80) {
      cut -= 1;
    }
    format!("Text: {} {}", show(&raw[..cut]), self.paint(YELLOW, "...[snip]"))
  }

  /// The lines describing a decoded chunk. `Unrecognized` has none.
  pub fn describe(&self, chunk: &PngChunk<'_>) -> Vec<String> {
    match chunk {
      PngChunk::IHDR(ihdr) => vec![
        format!(
          "General Info: {} {}bit image",
          self.paint(BLUE, format!("{}x{}", ihdr.width, ihdr.height)),
          ihdr.bit_depth
        ),
        format!("Color Type: {}", color_type_name(ihdr.color_type)),
        format!("Compression Method: {}", ihdr.compression_method),
        format!("Filter Method: {}", ihdr.filter_method),
        format!("Interlace Method: {}", ihdr.interlace_method),
      ],
      PngChunk::sRGB(srgb) => vec![match srgb.intent {
        SrgbIntent::Perceptual => "Intent: Perceptual".to_string(),
        SrgbIntent::RelativeColorimetric => "Intent: Relative colorimetric".to_string(),
        SrgbIntent::Saturation => "Intent: Saturation".to_string(),
        SrgbIntent::AbsoluteColorimetric => "Intent: Absolute colorimetric".to_string(),
        SrgbIntent::Unknown(_) => self.paint(RED, "Intent: UNKNOWN"),
      }],
      PngChunk::bKGD(bkgd) => {
        let (value, kind) = match bkgd {
          bKGD::Index { i } => (i.to_string(), "Palette Index"),
          bKGD::Greyscale { y } => (y.to_string(), "Grayscale"),
          bKGD::RGB { r, g, b } => (format!("({r}, {g}, {b})"), "RGB triplet"),
          bKGD::Unknown => ("None".to_string(), "UNKNOWN"),
        };
        vec![
          format!("Background Color: {}", self.paint(BLUE, value)),
          format!("Value Type: {kind}"),
        ]
      }
      PngChunk::pHYs(phys) => {
        let (w, h) = phys.physical_size_cm();
        let unit = match phys.unit {
          PhysUnit::Meter => "cm",
          PhysUnit::Unknown(_) => "unknown unit",
        };
        vec![format!("Physical Size: {w:.1} x {h:.1} {unit}")]
      }
      PngChunk::tIME(t) => vec![format!(
        "Last Modified: {}/{}/{} {}:{}.{}",
        t.year, t.month, t.day, t.hour, t.minute, t.second
      )],
      PngChunk::iCCP(iccp) => vec![
        format!("ICC Profile Name: {}", latin1_to_string(iccp.name)),
        format!("Compression Method: {}", iccp.compression_method),
      ],
      PngChunk::tEXt(text) => vec![
        format!("Keyword: {}", latin1_to_string(text.keyword)),
        self.text_line(text.text, false),
      ],
      PngChunk::zTXt(ztxt) => vec![
        format!("Keyword: {}", latin1_to_string(ztxt.keyword)),
        self.text_line(&ztxt.text, false),
      ],
      PngChunk::iTXt(itxt) => vec![
        format!("Keyword: {}", self.paint(BLUE, latin1_to_string(itxt.keyword))),
        format!("Compressed: {}", itxt.is_compressed()),
        format!("Compression Method: {}", itxt.compression_method),
        format!("Language Tag: {}", String::from_utf8_lossy(itxt.language_tag)),
        format!("Translated Keyword: {}", String::from_utf8_lossy(itxt.translated_keyword)),
        self.text_line(&itxt.text, true),
      ],
      PngChunk::pCAL(pcal) => vec![
        "Pixel Calibration".to_string(),
        format!("Calibration Name: {}", latin1_to_string(pcal.name)),
        format!("x0: {}", pcal.x0),
        format!("x1: {}", pcal.x1),
        format!("Equation Type: {}", pcal.equation_type),
        format!("Number of parameters: {}", pcal.num_params),
        format!("Unit Name: {}", latin1_to_string(pcal.unit_name)),
        format!("Parameter 0: {}", latin1_to_string(pcal.param0)),
        format!("Parameter L: {}", latin1_to_string(pcal.remaining_params)),
      ],
      PngChunk::cHRM(chrm) => {
        let (wx, wy) = chrm.white_point();
        let (rx, ry) = chrm.red();
        let (gx, gy) = chrm.green();
        let (bx, by) = chrm.blue();
        vec![
          "Primary chromaticities and white point".to_string(),
          format!("White Point x: {wx}"),
          format!("White Point y: {wy}"),
          format!("Red x: {rx}"),
          format!("Red y: {ry}"),
          format!("Green x: {gx}"),
          format!("Green y: {gy}"),
          format!("Blue x: {bx}"),
          format!("Blue y: {by}"),
        ]
      }
      PngChunk::gAMA(gama) => vec![format!("Gamma: {:.2}", gama.value())],
      PngChunk::Unrecognized(_) => Vec::new(),
    }
  }
}

fn color_type_name(color_type: PngColorType) -> String {
  match color_type {
    PngColorType::Y => "Greyscale".to_string(),
    PngColorType::RGB => "RGB".to_string(),
    PngColorType::Index => "Palette Index".to_string(),
    PngColorType::YA => "Greyscale + alpha sample".to_string(),
    PngColorType::RGBA => "RGB + alpha sample".to_string(),
    PngColorType::Unknown(n) => format!("UNKNOWN ({n})"),
  }
}

/// `1234567` becomes `"1,234,567"`.
pub fn with_thousands(n: usize) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}
