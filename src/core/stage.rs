//! Transform stages: the pure steps a task threads its artifacts through.

use serde::{Deserialize, Serialize};

use crate::core::artifact::Artifact;
use crate::core::error::{Error, Result};
use crate::core::{minify, paths};

/// One step in a task's transform chain. Stages compose left to right
/// exactly as declared; each maps an artifact list to a new artifact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Stage {
    /// Merge all inputs, in input order, into a single named output.
    /// Payloads are joined with no separator beyond what each source file
    /// already ends with. The output name may carry a `{version}` placeholder.
    Concat { output: String },

    /// Replace each artifact's extension, or assign a fixed literal name
    /// when operating on a single-artifact stream. Exactly one of the two
    /// fields must be set.
    Rename {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extension: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },

    MinifyJs,
    MinifyCss,
    MinifyHtml,

    /// Byte-identical passthrough, for binary assets and files that must
    /// reach the destination unmodified.
    Copy,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Concat { .. } => "concat",
            Stage::Rename { .. } => "rename",
            Stage::MinifyJs => "minifyJs",
            Stage::MinifyCss => "minifyCss",
            Stage::MinifyHtml => "minifyHtml",
            Stage::Copy => "copy",
        }
    }

    /// Structural validation, run before any task executes.
    pub fn validate(&self) -> Result<()> {
        if let Stage::Rename { extension, name } = self {
            match (extension, name) {
                (None, None) => {
                    return Err(Error::config_invalid_value(
                        "stages.rename",
                        None,
                        "requires either 'extension' or 'name'",
                    ));
                }
                (Some(_), Some(_)) => {
                    return Err(Error::config_invalid_value(
                        "stages.rename",
                        None,
                        "accepts only one of 'extension' or 'name'",
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply this stage to an artifact stream, producing a new stream.
    pub fn apply(&self, input: Vec<Artifact>, version: &str) -> Result<Vec<Artifact>> {
        match self {
            Stage::Concat { output } => {
                if input.is_empty() {
                    return Ok(Vec::new());
                }

                let mut bytes = Vec::with_capacity(input.iter().map(|a| a.bytes.len()).sum());
                for artifact in &input {
                    bytes.extend_from_slice(&artifact.bytes);
                }

                let name = paths::interpolate_version(output, version);
                Ok(vec![Artifact::synthesized(name, bytes)])
            }

            Stage::Rename { extension, name } => {
                self.validate()?;

                if let Some(extension) = extension {
                    let ext = extension.trim_start_matches('.');
                    return Ok(input
                        .into_iter()
                        .map(|artifact| {
                            let rel = artifact.rel.with_extension(ext);
                            Artifact::new(rel, artifact.bytes, artifact.source)
                        })
                        .collect());
                }

                // Fixed literal name: only meaningful for a single artifact.
                let fixed = name.as_deref().unwrap_or_default();
                if input.len() > 1 {
                    return Err(Error::stage_failed(
                        self.label(),
                        None,
                        format!(
                            "fixed name '{}' requires a single-artifact stream, got {}",
                            fixed,
                            input.len()
                        ),
                    ));
                }

                let fixed = paths::interpolate_version(fixed, version);
                Ok(input
                    .into_iter()
                    .map(|artifact| Artifact::new(fixed.clone(), artifact.bytes, artifact.source))
                    .collect())
            }

            Stage::MinifyJs => Ok(input
                .into_iter()
                .map(|artifact| {
                    Artifact::new(artifact.rel, minify::js(artifact.bytes), artifact.source)
                })
                .collect()),

            Stage::MinifyCss => input
                .into_iter()
                .map(|artifact| {
                    let text = utf8(&artifact, self.label())?;
                    let minified = minify::css(text, &artifact.origin())?;
                    Ok(Artifact::new(
                        artifact.rel,
                        minified.into_bytes(),
                        artifact.source,
                    ))
                })
                .collect(),

            Stage::MinifyHtml => input
                .into_iter()
                .map(|artifact| {
                    let text = utf8(&artifact, self.label())?;
                    let minified = minify::html(text)?;
                    Ok(Artifact::new(
                        artifact.rel,
                        minified.into_bytes(),
                        artifact.source,
                    ))
                })
                .collect(),

            Stage::Copy => Ok(input),
        }
    }
}

fn utf8<'a>(artifact: &'a Artifact, stage: &str) -> Result<&'a str> {
    std::str::from_utf8(&artifact.bytes).map_err(|_| {
        Error::stage_failed(
            stage,
            Some(artifact.origin()),
            "content is not valid UTF-8",
        )
    })
}

/// Fold an artifact stream through an ordered stage chain.
/// Intermediate outputs exist only in memory; nothing is persisted here.
pub fn apply_chain(
    stages: &[Stage],
    mut artifacts: Vec<Artifact>,
    version: &str,
) -> Result<Vec<Artifact>> {
    for stage in stages {
        artifacts = stage.apply(artifacts, version)?;
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn artifact(rel: &str, bytes: &[u8]) -> Artifact {
        Artifact::new(rel, bytes.to_vec(), Some(PathBuf::from(rel)))
    }

    #[test]
    fn concat_joins_in_order_with_no_separator() {
        let stage = Stage::Concat {
            output: "lightwave-ui.{version}.js".to_string(),
        };

        let out = stage
            .apply(
                vec![artifact("a.js", b"var a=1;"), artifact("b.js", b"var b=2;")],
                "1.0.2.0",
            )
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rel, PathBuf::from("lightwave-ui.1.0.2.0.js"));
        assert_eq!(out[0].bytes, b"var a=1;var b=2;");
        assert!(out[0].source.is_none());
    }

    #[test]
    fn concat_of_nothing_yields_nothing() {
        let stage = Stage::Concat {
            output: "bundle.js".to_string(),
        };
        assert!(stage.apply(Vec::new(), "1.0.2.0").unwrap().is_empty());
    }

    #[test]
    fn rename_extension_replaces_any_input_extension() {
        let stage = Stage::Rename {
            extension: Some(".min.js".to_string()),
            name: None,
        };

        let out = stage
            .apply(
                vec![
                    artifact("lightwave-ui.1.0.2.0.js", b"x"),
                    artifact("vendor.txt", b"y"),
                ],
                "1.0.2.0",
            )
            .unwrap();

        assert_eq!(out[0].rel, PathBuf::from("lightwave-ui.1.0.2.0.min.js"));
        assert_eq!(out[1].rel, PathBuf::from("vendor.min.js"));
    }

    #[test]
    fn rename_fixed_name_requires_single_artifact() {
        let stage = Stage::Rename {
            extension: None,
            name: Some("lightwave-ui.{version}.min.css".to_string()),
        };

        let out = stage
            .apply(vec![artifact("app.css", b"body{}")], "1.0.2.0")
            .unwrap();
        assert_eq!(out[0].rel, PathBuf::from("lightwave-ui.1.0.2.0.min.css"));

        let err = stage
            .apply(
                vec![artifact("a.css", b""), artifact("b.css", b"")],
                "1.0.2.0",
            )
            .unwrap_err();
        assert_eq!(err.code.as_str(), "stage.failed");
    }

    #[test]
    fn rename_requires_exactly_one_target() {
        let neither = Stage::Rename {
            extension: None,
            name: None,
        };
        assert!(neither.validate().is_err());

        let both = Stage::Rename {
            extension: Some(".min.js".to_string()),
            name: Some("x.js".to_string()),
        };
        assert!(both.validate().is_err());
    }

    #[test]
    fn copy_is_byte_identical_for_binary_payloads() {
        let payload = vec![0x89u8, 0x50, 0x4e, 0x47, 0x00, 0xff, 0x1a];
        let input = vec![Artifact::new(
            "logo.png",
            payload.clone(),
            Some(PathBuf::from("app/assets/logo.png")),
        )];

        let out = Stage::Copy.apply(input, "1.0.2.0").unwrap();
        assert_eq!(out[0].bytes, payload);
        assert_eq!(out[0].rel, PathBuf::from("logo.png"));
    }

    #[test]
    fn minify_stages_preserve_order_and_cardinality() {
        let out = Stage::MinifyHtml
            .apply(
                vec![
                    artifact("one.html", b"<p>  one  </p>"),
                    artifact("two.html", b"<p>  two  </p>"),
                ],
                "1.0.2.0",
            )
            .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].rel, PathBuf::from("one.html"));
        assert_eq!(out[1].rel, PathBuf::from("two.html"));
    }

    #[test]
    fn stage_chain_composes_left_to_right() {
        let stages = vec![
            Stage::Concat {
                output: "lightwave-ui-vendor.{version}.css".to_string(),
            },
            Stage::MinifyCss,
            Stage::Rename {
                extension: Some(".min.css".to_string()),
                name: None,
            },
        ];

        let out = apply_chain(
            &stages,
            vec![
                artifact("one.css", b"a {  color: red;  }\n"),
                artifact("two.css", b"b {  color: blue;  }\n"),
            ],
            "1.0.2.0",
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].rel,
            PathBuf::from("lightwave-ui-vendor.1.0.2.0.min.css")
        );
        let text = String::from_utf8(out[0].bytes.clone()).unwrap();
        assert!(text.contains("a{color:red}"));
        assert!(text.contains("b{color:blue}"));
    }

    #[test]
    fn stage_json_representation_round_trips() {
        let stages = vec![
            Stage::Concat {
                output: "bundle.{version}.js".to_string(),
            },
            Stage::MinifyJs,
            Stage::Rename {
                extension: Some(".min.js".to_string()),
                name: None,
            },
            Stage::Copy,
        ];

        let json = serde_json::to_string(&stages).unwrap();
        assert!(json.contains(r#""kind":"concat""#));
        assert!(json.contains(r#""kind":"minifyJs""#));

        let back: Vec<Stage> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stages);
    }
}
