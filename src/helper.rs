use crate::error::Result;
use crate::layer::Layer;
use crate::matrix::ModuleMatrix;

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/*---- Utilities ----*/

/// Draws the given matrix with block characters, surrounded by `border`
/// light modules. Each module is two characters wide so the result looks square.
pub fn matrix_to_text(matrix: &ModuleMatrix, border: usize) -> String {
	let side = matrix.size() + 2 * border;
	let mut result = String::with_capacity(side * (side * 2 + 1) * 3);
	for y in 0..side {
		for x in 0..side {
			let dark = y >= border && x >= border && matrix.get(y - border, x - border);
			result.push_str(if dark { "██" } else { "  " });
		}
		result.push('\n');
	}
	result
}

/// Prints the given matrix to the console.
pub fn print_matrix(matrix: &ModuleMatrix, border: usize) {
	println!("{}", matrix_to_text(matrix, border));
}

/// Saves a rendered layer as a PNG file.
///
/// # Arguments
///
/// * `layer` - The rendered image.
/// * `directory_path` - Optional. The directory the image is written to, created if missing. Defaults to "generated".
/// * `filename` - Optional. The file name, with or without a `.png` extension. Defaults to a timestamp.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created, or an image error
/// if encoding or writing fails.
///
/// # Example
///
/// ```rust,no_run
/// use qrdecor::{helper::save_png, EcLevel, StyledQr};
///
/// let layer = StyledQr::new("Hello, World!", EcLevel::M).unwrap().render().unwrap();
/// let path = save_png(&layer, Some("images"), Some("qr_code")).unwrap();
/// assert!(path.ends_with("qr_code.png"));
/// ```
pub fn save_png(layer: &Layer, directory_path: Option<&str>, filename: Option<&str>) -> Result<PathBuf> {
	let directory_path = Path::new(directory_path.unwrap_or("generated"));
	let filename = match filename {
		Some(name) => name.trim_end_matches(".png").to_string(),
		None => {
			let since_the_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
			since_the_epoch.as_millis().to_string()
		}
	};

	// Check if the directory exists, create it if it doesn't
	if !directory_path.exists() {
		fs::create_dir_all(directory_path)?;
	}

	let file_path = directory_path.join(format!("{}.png", filename));
	layer.as_image().save(&file_path)?;
	debug!("wrote {}x{} image to {}", layer.width(), layer.height(), file_path.display());
	Ok(file_path)
}

// Tests
#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::Color;

	#[test]
	fn test_matrix_to_text() {
		let mut matrix = ModuleMatrix::new(2);
		matrix.set(0, 1, true);
		let text = matrix_to_text(&matrix, 1);
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 4);
		assert_eq!(lines[0], "        ");
		assert_eq!(lines[1], "    ██  ");
		assert_eq!(lines[2], "        ");
	}

	#[test]
	fn test_save_png() {
		let dir = std::env::temp_dir().join(format!("qrdecor-save-{}", std::process::id()));
		let layer = Layer::new(12, 8, Color::WHITE, 100).unwrap();
		let path = save_png(&layer, dir.to_str(), Some("sample.png")).unwrap();

		assert_eq!(path, dir.join("sample.png"));
		let img = image::open(&path).unwrap();
		assert_eq!((img.width(), img.height()), (12, 8));
		fs::remove_dir_all(&dir).unwrap();
	}
}
