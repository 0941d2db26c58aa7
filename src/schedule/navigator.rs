/// Navigation to chapter links through the desktop's URL/file opener.

use crate::core::error::NavigateError;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

/// Anything that can take the user to a chapter link.
pub trait Navigator {
    /// Start navigating to `link`. Must not wait for the navigation to finish.
    fn navigate(&mut self, link: &str) -> Result<(), NavigateError>;

    /// Collect navigations that have since failed. Called once per frame.
    fn reap(&mut self) -> Vec<NavigateError> {
        Vec::new()
    }
}

/// An opener process that has not exited yet.
struct Launch {
    target: String,
    child: Child,
}

/// Opens links with an external opener (`xdg-open` by default).
/// Relative links are resolved against the chapters root.
pub struct SystemNavigator {
    opener: String,
    root: PathBuf,
    running: Vec<Launch>,
}

impl SystemNavigator {
    pub fn new(root: &Path) -> Self {
        Self {
            opener: "xdg-open".to_string(),
            root: root.to_path_buf(),
            running: Vec::new(),
        }
    }

    pub fn with_opener(mut self, opener: &str) -> Self {
        self.opener = opener.to_string();
        self
    }

    /// Absolute URLs pass through; everything else is a path under the root.
    pub fn resolve(&self, link: &str) -> String {
        if link.contains("://") {
            return link.to_string();
        }
        let path = Path::new(link);
        if path.is_absolute() {
            return link.to_string();
        }
        self.root.join(path).to_string_lossy().to_string()
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, link: &str) -> Result<(), NavigateError> {
        let target = self.resolve(link);
        log::info!("Opening chapter {} with {}", target, self.opener);

        let child = Command::new(&self.opener)
            .arg(&target)
            .spawn()
            .map_err(|source| NavigateError::Spawn {
                opener: self.opener.clone(),
                target: target.clone(),
                source,
            })?;

        self.running.push(Launch { target, child });
        Ok(())
    }

    fn reap(&mut self) -> Vec<NavigateError> {
        let mut failures = Vec::new();
        let opener = &self.opener;

        self.running.retain_mut(|launch| match launch.child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                if status.success() {
                    log::debug!("{} finished for {}", opener, launch.target);
                } else {
                    failures.push(NavigateError::OpenerFailed {
                        opener: opener.clone(),
                        target: launch.target.clone(),
                        status,
                    });
                }
                false
            }
            Err(e) => {
                log::warn!("Lost track of {} for {}: {}", opener, launch.target, e);
                false
            }
        });

        failures
    }
}

#[cfg(test)]
impl SystemNavigator {
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Reap until every opener has exited, or give up after five seconds.
    pub fn reap_all(&mut self) -> Vec<NavigateError> {
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut failures = self.reap();
        while self.running() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            failures.extend(self.reap());
        }
        failures
    }
}

/// Records navigations instead of performing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&mut self, link: &str) -> Result<(), NavigateError> {
        self.visited.borrow_mut().push(link.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let nav = SystemNavigator::new(Path::new("/srv/book"));
        assert_eq!(
            nav.resolve("chapters/chapter3.html"),
            "/srv/book/chapters/chapter3.html"
        );
    }

    #[test]
    fn test_resolve_passes_urls_through() {
        let nav = SystemNavigator::new(Path::new("/srv/book"));
        assert_eq!(
            nav.resolve("https://example.org/chapter/1"),
            "https://example.org/chapter/1"
        );
        assert_eq!(nav.resolve("/tmp/chapter1.html"), "/tmp/chapter1.html");
    }

    #[test]
    fn test_missing_opener_is_spawn_error() {
        let mut nav = SystemNavigator::new(Path::new("."))
            .with_opener("night-chapters-no-such-opener");
        let err = nav.navigate("chapters/chapter1.html").unwrap_err();
        assert!(matches!(err, NavigateError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_opener_is_reported_on_reap() {
        let mut nav = SystemNavigator::new(Path::new("/srv/book")).with_opener("false");
        assert!(nav.navigate("chapters/chapter1.html").is_ok());
        assert_eq!(nav.running(), 1);

        let failures = nav.reap_all();
        assert_eq!(nav.running(), 0);
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            NavigateError::OpenerFailed { target, .. } if target == "/srv/book/chapters/chapter1.html"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_opener() {
        let mut nav = SystemNavigator::new(Path::new(".")).with_opener("true");
        assert!(nav.navigate("chapters/chapter1.html").is_ok());
        assert!(nav.reap_all().is_empty());
        assert_eq!(nav.running(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_navigate_does_not_wait_for_opener() {
        // An empty root leaves the link as-is, so this runs `sleep 3`
        let mut nav = SystemNavigator::new(Path::new("")).with_opener("sleep");
        assert_eq!(nav.resolve("3"), "3");
        let started = std::time::Instant::now();
        nav.navigate("3").unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
        assert!(nav.reap().is_empty());
        assert_eq!(nav.running(), 1);
    }

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::default();
        nav.navigate("chapters/chapter2.html").unwrap();
        assert_eq!(*nav.visited.borrow(), vec!["chapters/chapter2.html"]);
    }
}
