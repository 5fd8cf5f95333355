//! Project assembly.

use crate::archive::archive_dir;
use crate::error::GeneratorResult;
use crate::icon::process_icon;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use webwrap_core::{
    GeneratedProject, GenerationRequest, PackageName, TemplateContext, TemplateKey, normalize_url,
};

/// Assembles Android WebView projects under a shared work root.
///
/// Each generation gets its own UUID-named working directory, so concurrent
/// generations never collide and no locking is needed. The working directory
/// is removed once its contents are captured in the archive; the archive
/// itself stays until an operator cleans it up.
pub struct ProjectGenerator {
    work_root: PathBuf,
}

impl ProjectGenerator {
    /// Create a generator rooted at `work_root`, creating the directory if
    /// it does not exist yet.
    pub fn new(work_root: impl AsRef<Path>) -> GeneratorResult<Self> {
        let work_root = work_root.as_ref().to_path_buf();
        fs::create_dir_all(&work_root)?;
        Ok(Self { work_root })
    }

    pub fn work_root(&self) -> &Path {
        &self.work_root
    }

    /// Location of the archive for a given project id. The file exists only
    /// after a successful [`ProjectGenerator::generate`] with that id.
    pub fn archive_path(&self, project_id: Uuid) -> PathBuf {
        self.work_root.join(format!("{project_id}.zip"))
    }

    /// Run one generation end to end: render the template set into a fresh
    /// working directory, process the optional icon, pack the tree into a ZIP
    /// named by a new project id, and remove the working directory.
    ///
    /// Icon failures are non-fatal; the project then ships without custom
    /// icons. Every other failure aborts the generation. The working
    /// directory is removed on success and failure alike.
    pub fn generate(&self, request: &GenerationRequest) -> GeneratorResult<GeneratedProject> {
        let project_id = Uuid::new_v4();
        let work_tree = WorkTree::create(self.work_root.join(project_id.to_string()))?;

        let package_name = PackageName::sanitize(&request.app_name);
        let website_url = normalize_url(&request.website_url);

        let main_dir = work_tree.path().join("app").join("src").join("main");
        let java_dir = main_dir
            .join("java")
            .join("com")
            .join("websitetoapp")
            .join(package_name.as_str());
        let res_dir = main_dir.join("res");
        let layout_dir = res_dir.join("layout");
        let values_dir = res_dir.join("values");
        for dir in [&java_dir, &layout_dir, &values_dir] {
            fs::create_dir_all(dir)?;
        }

        let ctx = TemplateContext {
            package_name: &package_name,
            app_name: &request.app_name,
            website_url: &website_url,
        };
        for key in TemplateKey::ALL {
            fs::write(work_tree.path().join(key.relative_path(&package_name)), key.render(&ctx))?;
        }

        if let Some(icon) = &request.icon {
            process_icon(icon, &res_dir);
        }

        let archive_path = self.archive_path(project_id);
        let files = archive_dir(work_tree.path(), &archive_path)?;
        tracing::debug!(
            project_id = %project_id,
            package_name = %package_name,
            files,
            "project packed"
        );

        Ok(GeneratedProject {
            project_id,
            package_name,
            archive_path,
        })
    }
}

/// A working directory removed on drop, so partial trees never outlive a
/// failed generation.
struct WorkTree {
    path: PathBuf,
}

impl WorkTree {
    fn create(path: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkTree {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove working directory"
            );
        }
    }
}
