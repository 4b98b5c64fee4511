use std::path::Path;

/// Last path component, for progress output
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// "folder/file" label, used where the file name alone is ambiguous
pub fn folder_label(path: &Path) -> String {
    match path.parent().and_then(|p| p.file_name()) {
        Some(folder) => format!("{}/{}", folder.to_string_lossy(), file_label(path)),
        None => file_label(path),
    }
}

pub fn format_dims(width: u32, height: u32) -> String {
    format!("{}x{}", width, height)
}
