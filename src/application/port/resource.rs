// SPDX-License-Identifier: MPL-2.0
//! Resource loading port definition.
//!
//! A [`ResourceLoader`] maps a logical resource name (`messages`,
//! `messages.fr`, `conf/messages.en-US`) to the sources that provide it.
//! Deployments that layer several resource roots return one source per root.

use std::io;

/// A single located resource.
pub trait ResourceSource {
    /// Human readable identifier, used in error messages and logs.
    fn id(&self) -> &str;

    /// Reads the whole resource as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or `InvalidData` for non UTF-8 content.
    fn read(&self) -> io::Result<String>;
}

/// Port for locating messages resources.
///
/// # Ordering
///
/// Sources are listed in a stable order. When several sources define the same
/// key, the one listed last wins.
///
/// # Example
///
/// ```ignore
/// use lang_messages::application::port::ResourceLoader;
///
/// fn dump(loader: &impl ResourceLoader) -> std::io::Result<()> {
///     for source in loader.list("messages") {
///         println!("{}: {} bytes", source.id(), source.read()?.len());
///     }
///     Ok(())
/// }
/// ```
pub trait ResourceLoader: Send + Sync {
    /// Lists every source for `name`. An absent resource yields an empty list.
    fn list(&self, name: &str) -> Vec<Box<dyn ResourceSource + '_>>;
}
