//! Manifest-driven orchestrator
//!
//! Replays an upstream compiler's build manifest through the lifecycle hooks:
//! resolve options, emit every chunk and asset in manifest order, hand the
//! finalized bundle to `generate_bundle`, flush it, then call `write_bundle`.

use std::path::{Component, Path, PathBuf};

use log::{debug, info, trace};

use super::manifest::{resolve_content, AssetEntry, BuildManifest, ChunkEntry, ManifestEntry};
use crate::domain::entities::{is_stylesheet_name, BuildArtifact, Bundle};
use crate::domain::ports::{BuildOutput, BuildPlugin, FileSystem, Orchestrator, OrchestratorOptions};
use crate::domain::services::FALLBACK_ASSET_PATTERN;
use crate::domain::value_objects::{ContentHash, CssSplitMode};
use crate::error::{InlineError, InlineResult};

/// Default name of the merged stylesheet when no plugin renames it
const MERGED_STYLESHEET_NAME: &str = "style.css";

/// Orchestrator that replays a parsed [`BuildManifest`]
pub struct ManifestOrchestrator<'fs> {
    manifest: BuildManifest,
    manifest_path: PathBuf,
    out_dir: PathBuf,
    fs: &'fs dyn FileSystem,
}

impl std::fmt::Debug for ManifestOrchestrator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestOrchestrator")
            .field("manifest_path", &self.manifest_path)
            .field("out_dir", &self.out_dir)
            .field("entries", &self.manifest.output.len())
            .finish()
    }
}

impl<'fs> ManifestOrchestrator<'fs> {
    pub fn new(
        manifest: BuildManifest,
        manifest_path: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        fs: &'fs dyn FileSystem,
    ) -> Self {
        Self {
            manifest,
            manifest_path: manifest_path.into(),
            out_dir: out_dir.into(),
            fs,
        }
    }

    /// Load the manifest at `manifest_path` and build an orchestrator for it
    pub fn load(
        manifest_path: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        fs: &'fs dyn FileSystem,
    ) -> InlineResult<Self> {
        let manifest_path = manifest_path.into();
        let manifest = BuildManifest::load(fs, &manifest_path)?;
        Ok(Self::new(manifest, manifest_path, out_dir, fs))
    }

    fn base_dir(&self) -> &Path {
        match self.manifest_path.parent() {
            Some(parent) => parent,
            None => Path::new("."),
        }
    }

    fn drive(
        &self,
        plugins: &mut [&mut dyn BuildPlugin],
        options: &mut OrchestratorOptions,
    ) -> InlineResult<BuildOutput> {
        for plugin in plugins.iter_mut() {
            trace!("config_resolved -> {}", plugin.name());
            plugin.config_resolved(options)?;
        }

        options.begin_emission();
        for plugin in plugins.iter_mut() {
            plugin.build_start(options)?;
        }

        let mut bundle = self.emit(plugins, options)?;
        debug!("Emitted {} artifact(s)", bundle.len());

        for plugin in plugins.iter_mut() {
            trace!("generate_bundle -> {}", plugin.name());
            plugin.generate_bundle(options, &mut bundle)?;
        }

        let written = self.flush(options.out_dir(), &bundle)?;

        for plugin in plugins.iter_mut() {
            plugin.write_bundle(options, &bundle)?;
        }

        Ok(BuildOutput { written })
    }

    /// Resolve every manifest entry into the bundle, in manifest order
    fn emit(
        &self,
        plugins: &[&mut dyn BuildPlugin],
        options: &OrchestratorOptions,
    ) -> InlineResult<Bundle> {
        let mut pending = Vec::with_capacity(self.manifest.output.len());
        let mut merged_css: Option<(usize, Vec<String>, String)> = None;

        for entry in &self.manifest.output {
            match entry {
                ManifestEntry::Chunk(chunk) => {
                    pending.push(Some(self.chunk_artifact(chunk, options)?));
                }
                ManifestEntry::Asset(asset) => {
                    let content = self.asset_content(asset)?;
                    let names = candidate_names(asset);
                    let is_css = names.iter().any(|n| is_stylesheet_name(n));

                    if is_css && options.css_split() == CssSplitMode::Single {
                        // Merge into the slot of the first stylesheet
                        match merged_css.as_mut() {
                            Some((_, merged, css)) => {
                                merged.extend(names);
                                css.push_str(&content);
                            }
                            None => {
                                merged_css = Some((pending.len(), names, content));
                                pending.push(None);
                            }
                        }
                    } else {
                        let asset = AssetEntry {
                            names,
                            original_file_name: asset.original_file_name.clone(),
                            ..AssetEntry::default()
                        };
                        pending.push(Some(self.asset_artifact(plugins, &asset, content)));
                    }
                }
            }
        }

        if let Some((slot, mut names, css)) = merged_css {
            if names.is_empty() {
                names.push(MERGED_STYLESHEET_NAME.to_string());
            }
            let merged = AssetEntry {
                names,
                ..AssetEntry::default()
            };
            pending[slot] = Some(self.asset_artifact(plugins, &merged, css));
        }

        let mut bundle = Bundle::new();
        for artifact in pending.into_iter().flatten() {
            bundle.emit(artifact);
        }
        Ok(bundle)
    }

    fn chunk_artifact(
        &self,
        chunk: &ChunkEntry,
        options: &OrchestratorOptions,
    ) -> InlineResult<BuildArtifact> {
        let what = if chunk.is_entry {
            format!("entry chunk '{}'", chunk.file_name)
        } else {
            format!("chunk '{}'", chunk.file_name)
        };
        let code = resolve_content(
            self.fs,
            self.base_dir(),
            &what,
            chunk.code.as_deref(),
            chunk.code_path.as_deref(),
            &self.manifest_path,
        )?;

        let file_name = match options.entry_file_name() {
            Some(name) if chunk.is_entry => name.to_string(),
            _ => chunk.file_name.clone(),
        };
        Ok(BuildArtifact::chunk(file_name, code, chunk.is_entry))
    }

    fn asset_content(&self, asset: &AssetEntry) -> InlineResult<String> {
        let label = asset
            .names
            .first()
            .or(asset.original_file_name.as_ref())
            .map_or_else(|| "asset".to_string(), |n| format!("asset '{n}'"));
        resolve_content(
            self.fs,
            self.base_dir(),
            &label,
            asset.source.as_deref(),
            asset.source_path.as_deref(),
            &self.manifest_path,
        )
    }

    fn asset_artifact(
        &self,
        plugins: &[&mut dyn BuildPlugin],
        asset: &AssetEntry,
        content: String,
    ) -> BuildArtifact {
        let pattern = plugins
            .iter()
            .find_map(|plugin| plugin.asset_file_name(&asset.names))
            .or_else(|| asset.names.first().cloned())
            .unwrap_or_else(|| FALLBACK_ASSET_PATTERN.to_string());

        let source_name = asset
            .original_file_name
            .as_deref()
            .or(asset.names.first().map(String::as_str))
            .unwrap_or("asset");
        let file_name = expand_pattern(&pattern, source_name, &content);

        BuildArtifact::asset(file_name, content).with_names(asset.names.clone())
    }

    fn flush(&self, out_dir: &Path, bundle: &Bundle) -> InlineResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(bundle.len());
        for artifact in bundle.iter() {
            let path = safe_join(out_dir, artifact.file_name())?;
            self.fs
                .write(&path, artifact.content())
                .map_err(|e| InlineError::Write {
                    path: path.clone(),
                    source: e.into_io(),
                })?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

impl Orchestrator for ManifestOrchestrator<'_> {
    fn run(&mut self, plugins: &mut [&mut dyn BuildPlugin]) -> InlineResult<BuildOutput> {
        info!(
            "Replaying {} ({} output(s))",
            self.manifest_path.display(),
            self.manifest.output.len()
        );
        let mut options = OrchestratorOptions::new(self.out_dir.clone());

        match self.drive(plugins, &mut options) {
            Ok(output) => Ok(output),
            Err(err) => {
                for plugin in plugins.iter_mut() {
                    plugin.build_error(&err);
                }
                Err(err)
            }
        }
    }
}

/// Candidate output names for an asset
///
/// A stylesheet known only by its `originalFileName` gets that base name as
/// an extra candidate, so it is named and collected like any other stylesheet.
fn candidate_names(asset: &AssetEntry) -> Vec<String> {
    let mut names = asset.names.clone();
    if !names.iter().any(|n| is_stylesheet_name(n)) {
        if let Some(original) = asset
            .original_file_name
            .as_deref()
            .filter(|n| is_stylesheet_name(n))
        {
            let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
            names.push(base.to_string());
        }
    }
    names
}

/// Expand `[name]`, `[hash]`, `[ext]` and `[extname]` in an asset file name pattern
pub fn expand_pattern(pattern: &str, source_name: &str, content: &str) -> String {
    if !pattern.contains('[') {
        return pattern.to_string();
    }
    let base = source_name.rsplit('/').next().unwrap_or(source_name);
    let (stem, extname) = match base.rfind('.') {
        Some(dot) if dot > 0 => base.split_at(dot),
        _ => (base, ""),
    };
    let hash = ContentHash::from_content(content);

    pattern
        .replace("[name]", stem)
        .replace("[hash]", hash.short())
        .replace("[extname]", extname)
        .replace("[ext]", extname.trim_start_matches('.'))
}

/// Join an output file name onto the output directory, refusing names that
/// would land outside it
fn safe_join(out_dir: &Path, file_name: &str) -> InlineResult<PathBuf> {
    let rel = Path::new(file_name);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || file_name.is_empty() {
        return Err(InlineError::PathEscape {
            path: rel.to_path_buf(),
            root: out_dir.to_path_buf(),
        });
    }
    Ok(out_dir.join(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;

    /// Records hook order and optionally renames stylesheets
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        css_name: Option<String>,
    }

    impl BuildPlugin for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn config_resolved(&mut self, options: &mut OrchestratorOptions) -> InlineResult<()> {
            self.calls.push("config_resolved".into());
            options.set_entry_file_name("widget.js")
        }

        fn build_start(&mut self, _options: &OrchestratorOptions) -> InlineResult<()> {
            self.calls.push("build_start".into());
            Ok(())
        }

        fn asset_file_name(&self, names: &[String]) -> Option<String> {
            if names.iter().any(|n| n.ends_with(".css")) {
                self.css_name.clone()
            } else {
                None
            }
        }

        fn generate_bundle(
            &mut self,
            _options: &OrchestratorOptions,
            bundle: &mut Bundle,
        ) -> InlineResult<()> {
            self.calls
                .push(format!("generate_bundle:{}", bundle.file_names().collect::<Vec<_>>().join(",")));
            Ok(())
        }

        fn write_bundle(&mut self, _options: &OrchestratorOptions, _bundle: &Bundle) -> InlineResult<()> {
            self.calls.push("write_bundle".into());
            Ok(())
        }

        fn build_error(&mut self, error: &InlineError) {
            self.calls.push(format!("build_error:{error}"));
        }
    }

    fn manifest(json: &str) -> BuildManifest {
        BuildManifest::parse(json, Path::new("m.json")).unwrap()
    }

    #[test]
    fn hooks_fire_in_lifecycle_order() {
        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(r#"{ "output": [ { "type": "chunk", "fileName": "main-1a2b.js", "isEntry": true, "code": "run()" } ] }"#),
            "m.json",
            "dist",
            &fs,
        );
        let mut recorder = Recorder::default();

        let output = orchestrator.run(&mut [&mut recorder]).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                "config_resolved",
                "build_start",
                "generate_bundle:widget.js",
                "write_bundle"
            ]
        );
        assert_eq!(output.written, vec![PathBuf::from("dist/widget.js")]);
        assert_eq!(fs.get(Path::new("dist/widget.js")).as_deref(), Some("run()"));
    }

    #[test]
    fn single_mode_merges_stylesheets_in_order() {
        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(
                r#"{ "output": [
                    { "type": "asset", "names": ["b.css"], "source": "b{}" },
                    { "type": "chunk", "fileName": "main.js", "isEntry": true, "code": "run()" },
                    { "type": "asset", "names": ["a.css"], "source": "a{}" }
                ] }"#,
            ),
            "m.json",
            "dist",
            &fs,
        );
        let mut recorder = Recorder {
            css_name: Some("widget.css".into()),
            ..Recorder::default()
        };

        orchestrator.run(&mut [&mut recorder]).unwrap();

        assert_eq!(recorder.calls[2], "generate_bundle:widget.css,widget.js");
        assert_eq!(fs.get(Path::new("dist/widget.css")).as_deref(), Some("b{}a{}"));
    }

    #[test]
    fn split_mode_keeps_stylesheets_separate() {
        struct Split;
        impl BuildPlugin for Split {
            fn name(&self) -> &'static str {
                "split"
            }
            fn config_resolved(&mut self, options: &mut OrchestratorOptions) -> InlineResult<()> {
                options.set_css_split(CssSplitMode::Split)
            }
            fn asset_file_name(&self, _names: &[String]) -> Option<String> {
                Some("w.css".into())
            }
        }

        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(
                r#"{ "output": [
                    { "type": "asset", "names": ["b.css"], "source": "b{}" },
                    { "type": "asset", "names": ["a.css"], "source": "a{}" }
                ] }"#,
            ),
            "m.json",
            "dist",
            &fs,
        );

        orchestrator.run(&mut [&mut Split]).unwrap();

        assert_eq!(fs.get(Path::new("dist/w.css")).as_deref(), Some("b{}"));
        assert_eq!(fs.get(Path::new("dist/w2.css")).as_deref(), Some("a{}"));
    }

    fn original_name_only_stylesheet(split: bool) -> (MemoryFs, Vec<PathBuf>) {
        use crate::application::InlineHtmlPlugin;
        use crate::domain::value_objects::AssemblyConfig;

        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(
                r#"{ "output": [
                    { "type": "chunk", "fileName": "main.js", "isEntry": true, "code": "run()" },
                    { "type": "asset", "names": ["style"], "originalFileName": "src/style.css", "source": "body{color:red}" }
                ] }"#,
            ),
            "m.json",
            "dist",
            &fs,
        );
        let mut plugin = InlineHtmlPlugin::new(
            AssemblyConfig::new("widget", "out.html").with_css_splitting(split),
        );

        let output = orchestrator.run(&mut [&mut plugin]).unwrap();
        (fs, output.written)
    }

    #[test]
    fn stylesheet_named_by_original_file_is_inlined_in_single_mode() {
        let (fs, written) = original_name_only_stylesheet(false);

        assert!(written.contains(&PathBuf::from("dist/widget.css")));
        assert!(!written.contains(&PathBuf::from("dist/style")));
        assert_eq!(
            fs.get(Path::new("dist/out.html")).as_deref(),
            Some("<style>body{color:red}</style>\n<script>run()</script>")
        );
    }

    #[test]
    fn stylesheet_named_by_original_file_is_inlined_in_split_mode() {
        let (fs, written) = original_name_only_stylesheet(true);

        assert!(written.contains(&PathBuf::from("dist/widget.css")));
        assert_eq!(
            fs.get(Path::new("dist/out.html")).as_deref(),
            Some("<style>body{color:red}</style>\n<script>run()</script>")
        );
    }

    #[test]
    fn candidate_names_fall_back_to_original_stylesheet_name() {
        let asset = AssetEntry {
            names: vec!["style".into()],
            original_file_name: Some("src/style.css".into()),
            ..AssetEntry::default()
        };
        assert_eq!(candidate_names(&asset), vec!["style", "style.css"]);

        let svg = AssetEntry {
            names: vec!["logo".into()],
            original_file_name: Some("src/logo.svg".into()),
            ..AssetEntry::default()
        };
        assert_eq!(candidate_names(&svg), vec!["logo"]);
    }

    #[test]
    fn unnamed_asset_uses_fallback_pattern() {
        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(r#"{ "output": [ { "type": "asset", "originalFileName": "src/logo.svg", "source": "hello" } ] }"#),
            "m.json",
            "dist",
            &fs,
        );

        orchestrator.run(&mut []).unwrap();

        assert_eq!(fs.paths(), vec![PathBuf::from("dist/assets/logo-2cf24dba.svg")]);
    }

    #[test]
    fn failure_before_flush_writes_nothing() {
        let fs = MemoryFs::new();
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(
                r#"{ "output": [
                    { "type": "asset", "names": ["a.css"], "source": "a{}" },
                    { "type": "chunk", "fileName": "main.js", "isEntry": true, "codePath": "missing.js" }
                ] }"#,
            ),
            "build/m.json",
            "dist",
            &fs,
        );
        let mut recorder = Recorder::default();

        let err = orchestrator.run(&mut [&mut recorder]).unwrap_err();

        assert!(matches!(err, InlineError::ConfigurationMissing { .. }));
        assert!(fs.paths().is_empty());
        assert!(recorder.calls.last().unwrap().starts_with("build_error:missing content of entry chunk"));
    }

    #[test]
    fn write_failure_is_reported_with_path() {
        let fs = MemoryFs::new();
        fs.fail_writes_to("dist/main.js");
        let mut orchestrator = ManifestOrchestrator::new(
            manifest(r#"{ "output": [ { "type": "chunk", "fileName": "main.js", "isEntry": true, "code": "x" } ] }"#),
            "m.json",
            "dist",
            &fs,
        );

        let err = orchestrator.run(&mut []).unwrap_err();

        match err {
            InlineError::Write { path, .. } => assert_eq!(path, PathBuf::from("dist/main.js")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn escaping_file_names_are_rejected() {
        assert!(safe_join(Path::new("dist"), "../evil.js").is_err());
        assert!(safe_join(Path::new("dist"), "/etc/passwd").is_err());
        assert!(safe_join(Path::new("dist"), "").is_err());
        assert_eq!(
            safe_join(Path::new("dist"), "assets/a.svg").unwrap(),
            PathBuf::from("dist/assets/a.svg")
        );
    }

    #[test]
    fn pattern_expansion() {
        assert_eq!(expand_pattern("fixed.css", "x.css", ""), "fixed.css");
        assert_eq!(
            expand_pattern("assets/[name]-[hash][extname]", "img/logo.svg", "hello"),
            "assets/logo-2cf24dba.svg"
        );
        assert_eq!(expand_pattern("[name].[ext]", "README", ""), "README.");
    }
}
