#[macro_export]
macro_rules! impl_manager_config {
    () => {
        pub fn with_root<P: Into<std::path::PathBuf>>(mut self, root: P) -> Self {
            self.root = root.into();

            self
        }

        pub fn with_keep_files<K: $crate::KeepFiles + 'static>(mut self, keep: K) -> Self {
            self.keep = Box::new(keep);

            self
        }

        pub fn with_cleanup(mut self, cleanup: std::sync::Arc<$crate::CleanupList>) -> Self {
            self.cleanup = cleanup;

            self
        }

        pub fn root(&self) -> &std::path::Path {
            &self.root
        }

        pub fn cleanup(&self) -> &$crate::CleanupList {
            &self.cleanup
        }

        pub fn cleanup_handle(&self) -> std::sync::Arc<$crate::CleanupList> {
            std::sync::Arc::clone(&self.cleanup)
        }
    };
}
