//! The editor state machine
//!
//! `Editor` owns the single image buffer and decides which operations are
//! legal. Transitions:
//!
//! | Trigger     | From        | To          |
//! |-------------|-------------|-------------|
//! | Open        | any         | ImageLoaded (unchanged on failure) |
//! | ApplyFilter | ImageLoaded | ImageLoaded |
//! | Save        | ImageLoaded | ImageLoaded |
//! | Close       | ImageLoaded | NoImage     |
//!
//! Filters mutate the buffer in place. There is no undo; the only way back
//! to the original pixels is to open the file again.

use std::path::{Path, PathBuf};

use super::data::LoadedImage;
use super::prompts::Prompts;
use super::trigger::{Trigger, UiState};
use crate::config::Config;
use crate::error::EditorError;
use crate::filters::FilterKind;
use crate::raster::{has_image_extension, ImageFamily, PixelImage};

/// Single-image editing session
#[derive(Debug)]
pub struct Editor {
    /// The open image, if any
    image: Option<LoadedImage>,
    /// Where the file chooser starts
    directory: PathBuf,
    /// Quality for JPEG output
    jpeg_quality: u8,
}

impl Editor {
    /// Create an editor with no image loaded
    pub fn new(config: &Config) -> Self {
        Self {
            image: None,
            directory: config.start_directory.clone(),
            jpeg_quality: config.jpeg_quality,
        }
    }

    pub fn state(&self) -> UiState {
        if self.image.is_some() {
            UiState::ImageLoaded
        } else {
            UiState::NoImage
        }
    }

    /// Read-only view of the current buffer
    pub fn image(&self) -> Option<&PixelImage> {
        self.image.as_ref().map(|loaded| &loaded.pixels)
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.image.as_ref().map(|loaded| loaded.source.as_path())
    }

    pub fn saved_path(&self) -> Option<&Path> {
        self.image.as_ref().and_then(|loaded| loaded.saved_to.as_deref())
    }

    /// Directory the next file prompt starts in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn is_enabled(&self, trigger: Trigger) -> bool {
        trigger.is_enabled_in(self.state())
    }

    /// Replace the current image with the one decoded from `path`.
    ///
    /// On any error the editor is left exactly as it was.
    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        if !has_image_extension(path) {
            return Err(EditorError::UnsupportedFormat(path.to_path_buf()));
        }

        let pixels = PixelImage::load(path).map_err(|source| EditorError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!(
            "📂 Opened {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        if let Some(previous) = self.image.replace(LoadedImage::new(pixels, path.to_path_buf())) {
            log::debug!("Discarded {}", previous.source.display());
        }
        self.remember_directory(path);

        Ok(())
    }

    /// Run a filter over the current buffer, in place
    pub fn apply_filter(&mut self, kind: FilterKind) -> Result<(), EditorError> {
        let loaded = self.image.as_mut().ok_or(EditorError::NoImage)?;

        kind.apply(&mut loaded.pixels);
        log::info!("🎨 Applied {} to {}", kind.label(), loaded.source.display());

        Ok(())
    }

    /// Encode the current buffer to `path`.
    ///
    /// The codec is picked from the file name with the same loose check used
    /// when opening.
    pub fn save(&mut self, path: &Path) -> Result<(), EditorError> {
        let loaded = self.image.as_mut().ok_or(EditorError::NoImage)?;
        let family = ImageFamily::detect(path)
            .ok_or_else(|| EditorError::UnsupportedSaveFormat(path.to_path_buf()))?;

        loaded
            .pixels
            .save(path, family, self.jpeg_quality)
            .map_err(|source| EditorError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("💾 Saved {} as {:?}", path.display(), family);

        loaded.saved_to = Some(path.to_path_buf());
        self.remember_directory(path);

        Ok(())
    }

    /// Drop the current image and its buffer
    pub fn close(&mut self) -> Result<(), EditorError> {
        let closed = self.image.take().ok_or(EditorError::NoImage)?;
        log::info!("Closed {}", closed.source.display());
        Ok(())
    }

    /// Route a trigger to its transition.
    ///
    /// Prompts for paths where needed; a cancelled prompt does nothing.
    /// Unsupported file names are reported to the user, while read/write
    /// failures are only logged. Returns `true` when the editor changed and
    /// the shell should re-render.
    pub fn dispatch(&mut self, trigger: Trigger, prompts: &dyn Prompts) -> bool {
        if !self.is_enabled(trigger) {
            log::warn!("Ignoring {:?} while {:?}", trigger, self.state());
            return false;
        }

        let result = match trigger {
            Trigger::Open => match prompts.request_open_path(&self.directory) {
                Some(path) => self.open(&path).map(|()| true),
                None => Ok(false),
            },
            Trigger::Save => match prompts.request_save_path(&self.directory) {
                Some(path) => self.save(&path).map(|()| true),
                None => Ok(false),
            },
            Trigger::Close => self.close().map(|()| true),
            Trigger::ApplyFilter(kind) => self.apply_filter(kind).map(|()| true),
        };

        match result {
            Ok(changed) => changed,
            Err(e @ (EditorError::UnsupportedFormat(_) | EditorError::UnsupportedSaveFormat(_))) => {
                log::warn!("{}", e);
                prompts.report_error(&e.to_string());
                false
            }
            Err(e) => {
                log::error!("❌ {}", e);
                false
            }
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.directory = parent.to_path_buf();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NOT_AN_IMAGE_MESSAGE;
    use image::{Rgb, RgbImage};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Prompts that answer from a script and record what they were asked
    #[derive(Default)]
    struct ScriptedPrompts {
        open_answers: RefCell<VecDeque<Option<PathBuf>>>,
        save_answers: RefCell<VecDeque<Option<PathBuf>>>,
        asked_in: RefCell<Vec<PathBuf>>,
        errors: RefCell<Vec<String>>,
    }

    impl ScriptedPrompts {
        fn will_open(&self, answer: Option<PathBuf>) -> &Self {
            self.open_answers.borrow_mut().push_back(answer);
            self
        }

        fn will_save(&self, answer: Option<PathBuf>) -> &Self {
            self.save_answers.borrow_mut().push_back(answer);
            self
        }

        fn errors(&self) -> Vec<String> {
            self.errors.borrow().clone()
        }
    }

    impl Prompts for ScriptedPrompts {
        fn request_open_path(&self, directory: &Path) -> Option<PathBuf> {
            self.asked_in.borrow_mut().push(directory.to_path_buf());
            self.open_answers.borrow_mut().pop_front().flatten()
        }

        fn request_save_path(&self, directory: &Path) -> Option<PathBuf> {
            self.asked_in.borrow_mut().push(directory.to_path_buf());
            self.save_answers.borrow_mut().pop_front().flatten()
        }

        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, seed: u8) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                seed.wrapping_add((x * 31) as u8),
                seed.wrapping_mul(3).wrapping_add((y * 17) as u8),
                (x * y) as u8,
            ])
        })
        .save(&path)
        .unwrap();
        path
    }

    fn editor() -> Editor {
        Editor::new(&Config::default())
    }

    #[test]
    fn test_starts_without_image() {
        let editor = editor();
        assert_eq!(editor.state(), UiState::NoImage);
        assert!(editor.image().is_none());
        assert_eq!(editor.directory(), Path::new("."));
        assert!(editor.is_enabled(Trigger::Open));
        assert!(!editor.is_enabled(Trigger::Save));
    }

    #[test]
    fn test_end_to_end_session() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 8, 6, 40);
        let output = dir.path().join("b.jpg");
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        prompts.will_open(Some(input.clone()));
        assert!(editor.dispatch(Trigger::Open, &prompts));
        assert_eq!(editor.state(), UiState::ImageLoaded);
        assert_eq!(editor.source_path(), Some(input.as_path()));

        assert!(editor.dispatch(Trigger::ApplyFilter(FilterKind::Grayscale), &prompts));
        let image = editor.image().unwrap();
        for y in 0..image.height() {
            for x in 0..image.width() {
                let [r, g, b] = image.get(x, y);
                assert!(r == g && g == b);
            }
        }

        prompts.will_save(Some(output.clone()));
        assert!(editor.dispatch(Trigger::Save, &prompts));
        assert!(output.exists());
        assert_eq!(editor.saved_path(), Some(output.as_path()));
        assert_eq!(PixelImage::load(&output).unwrap().dimensions(), (8, 6));

        assert!(editor.dispatch(Trigger::Close, &prompts));
        assert_eq!(editor.state(), UiState::NoImage);
        assert!(Trigger::all()
            .filter(|t| *t != Trigger::Open)
            .all(|t| !editor.is_enabled(t)));
        assert!(prompts.errors().is_empty());
    }

    #[test]
    fn test_unsupported_name_is_reported_and_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("photo.txt");
        std::fs::write(&notes, "hello").unwrap();
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        prompts.will_open(Some(notes));
        assert!(!editor.dispatch(Trigger::Open, &prompts));

        assert_eq!(editor.state(), UiState::NoImage);
        assert_eq!(prompts.errors(), [NOT_AN_IMAGE_MESSAGE]);
        assert_eq!(editor.directory(), Path::new("."));
    }

    #[test]
    fn test_unsupported_name_keeps_current_image() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_png(dir.path(), "first.png", 4, 4, 1);
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();
        editor.open(&first).unwrap();
        let before = editor.image().cloned();

        prompts.will_open(Some(dir.path().join("readme.md")));
        editor.dispatch(Trigger::Open, &prompts);

        assert_eq!(editor.image().cloned(), before);
        assert_eq!(prompts.errors().len(), 1);
    }

    #[test]
    fn test_decode_failure_is_logged_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not really a png").unwrap();
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        prompts.will_open(Some(broken.clone()));
        assert!(!editor.dispatch(Trigger::Open, &prompts));

        assert_eq!(editor.state(), UiState::NoImage);
        assert!(prompts.errors().is_empty());
        assert!(matches!(editor.open(&broken), Err(EditorError::Decode { .. })));
    }

    #[test]
    fn test_missing_file_is_a_decode_failure() {
        let mut editor = editor();
        let result = editor.open(Path::new("/nonexistent/path.png"));
        assert!(matches!(result, Err(EditorError::Decode { .. })));
        assert_eq!(editor.state(), UiState::NoImage);
    }

    #[test]
    fn test_cancelled_prompts_change_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 3, 3, 9);
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        prompts.will_open(None);
        assert!(!editor.dispatch(Trigger::Open, &prompts));
        assert_eq!(editor.state(), UiState::NoImage);

        editor.open(&input).unwrap();
        prompts.will_save(None);
        assert!(!editor.dispatch(Trigger::Save, &prompts));
        assert_eq!(editor.saved_path(), None);
        assert!(prompts.errors().is_empty());
    }

    #[test]
    fn test_reopen_discards_previous_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_png(dir.path(), "first.png", 5, 5, 10);
        let second = write_png(dir.path(), "second.png", 7, 3, 200);
        let mut editor = editor();

        editor.open(&first).unwrap();
        editor.apply_filter(FilterKind::EdgeDetect).unwrap();
        editor.apply_filter(FilterKind::FlipVertical).unwrap();
        editor.open(&second).unwrap();

        assert_eq!(editor.image(), Some(&PixelImage::load(&second).unwrap()));
        assert_eq!(editor.source_path(), Some(second.as_path()));
        assert_eq!(editor.saved_path(), None);
    }

    #[test]
    fn test_filters_are_irreversible_until_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 6, 6, 77);
        let pristine = PixelImage::load(&input).unwrap();
        let mut editor = editor();

        editor.open(&input).unwrap();
        editor.apply_filter(FilterKind::Grayscale).unwrap();
        editor.apply_filter(FilterKind::Sharpen).unwrap();

        let mut expected = pristine.clone();
        FilterKind::Grayscale.apply(&mut expected);
        FilterKind::Sharpen.apply(&mut expected);
        assert_eq!(editor.image(), Some(&expected));

        editor.open(&input).unwrap();
        assert_eq!(editor.image(), Some(&pristine));
    }

    #[test]
    fn test_operations_need_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = editor();

        assert!(matches!(editor.apply_filter(FilterKind::Soften), Err(EditorError::NoImage)));
        assert!(matches!(editor.save(&dir.path().join("x.png")), Err(EditorError::NoImage)));
        assert!(matches!(editor.close(), Err(EditorError::NoImage)));
        assert!(!dir.path().join("x.png").exists());
    }

    #[test]
    fn test_disabled_triggers_are_ignored() {
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        for trigger in Trigger::all().filter(|t| *t != Trigger::Open) {
            assert!(!editor.dispatch(trigger, &prompts));
        }

        assert_eq!(editor.state(), UiState::NoImage);
        // Save never got as far as asking for a path
        assert!(prompts.asked_in.borrow().is_empty());
    }

    #[test]
    fn test_save_with_unknown_name_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 3, 3, 5);
        let target = dir.path().join("out.bmp");
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();
        editor.open(&input).unwrap();

        prompts.will_save(Some(target.clone()));
        assert!(!editor.dispatch(Trigger::Save, &prompts));

        assert!(!target.exists());
        assert_eq!(prompts.errors().len(), 1);
        assert_eq!(editor.state(), UiState::ImageLoaded);
    }

    #[test]
    fn test_encode_failure_is_logged_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 3, 3, 5);
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();
        editor.open(&input).unwrap();

        prompts.will_save(Some(dir.path().join("no/such/dir/out.png")));
        assert!(!editor.dispatch(Trigger::Save, &prompts));

        assert!(prompts.errors().is_empty());
        assert_eq!(editor.state(), UiState::ImageLoaded);
        assert_eq!(editor.saved_path(), None);
    }

    #[test]
    fn test_failed_save_keeps_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        // Wider than JPEG allows, but a perfectly valid PNG
        let input = write_png(dir.path(), "panorama.png", 70_000, 1, 8);
        let target = dir.path().join("keep.jpg");
        std::fs::write(&target, b"previous contents").unwrap();
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();
        editor.open(&input).unwrap();

        prompts.will_save(Some(target.clone()));
        assert!(!editor.dispatch(Trigger::Save, &prompts));

        assert!(matches!(editor.save(&target), Err(EditorError::Encode { .. })));
        assert_eq!(std::fs::read(&target).unwrap(), b"previous contents");
        assert_eq!(editor.saved_path(), None);
        assert!(prompts.errors().is_empty());
    }

    #[test]
    fn test_prompts_start_in_last_used_directory() {
        let dir = tempfile::tempdir().unwrap();
        let photos = dir.path().join("photos");
        let exports = dir.path().join("exports");
        std::fs::create_dir_all(&photos).unwrap();
        std::fs::create_dir_all(&exports).unwrap();
        let input = write_png(&photos, "a.png", 3, 3, 5);
        let prompts = ScriptedPrompts::default();
        let mut editor = editor();

        prompts
            .will_open(Some(input))
            .will_save(Some(exports.join("a.gif")))
            .will_open(None);
        editor.dispatch(Trigger::Open, &prompts);
        editor.dispatch(Trigger::Save, &prompts);
        editor.dispatch(Trigger::Open, &prompts);

        assert_eq!(
            *prompts.asked_in.borrow(),
            [PathBuf::from("."), photos, exports]
        );
    }

    #[test]
    fn test_close_then_open_again() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "a.png", 4, 2, 3);
        let mut editor = editor();

        editor.open(&input).unwrap();
        editor.close().unwrap();
        assert_eq!(editor.state(), UiState::NoImage);
        assert!(editor.image().is_none());

        editor.open(&input).unwrap();
        assert_eq!(editor.state(), UiState::ImageLoaded);
        assert!(Trigger::all().all(|t| editor.is_enabled(t)));
    }

    #[test]
    fn test_start_directory_comes_from_config() {
        let config = Config {
            start_directory: PathBuf::from("/srv/pictures"),
            ..Config::default()
        };
        assert_eq!(Editor::new(&config).directory(), Path::new("/srv/pictures"));
    }
}
