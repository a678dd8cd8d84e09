//! Built-in bundle manifest: the Lightwave UI distribution pipeline.
//!
//! Shipped as the default so `bundleboy build` works without a
//! `bundleboy.json`; a manifest file at the build root overrides all of it.

use crate::core::manifest::{BundleManifest, TaskSpec};
use crate::core::stage::Stage;

/// Version tag stamped into every versioned bundle filename.
pub const VERSION_TAG: &str = "1.0.2.0";

/// Built-in manifest (ignoring any manifest file).
pub fn manifest() -> BundleManifest {
    BundleManifest {
        version: VERSION_TAG.to_string(),
        dist: "dist".to_string(),
        tasks: vec![
            app_shell_js(),
            app_js_minify(),
            vendor_js_minify(),
            html_minify(),
            vendor_css_minify(),
            app_css_minify(),
            copy_assets(),
            index_copy(),
            config_copy(),
            bootstrap_css(),
        ],
        sequence: vec![
            "lightwave-app-ui-js".to_string(),
            "lightwave-ui-js-minify".to_string(),
            "lightwave-ui-vendor-js-minify".to_string(),
            "lightwave-ui-html-minify".to_string(),
            "lightwave-ui-vendor-css-minify".to_string(),
            "lightwave-ui-css-minify".to_string(),
            "lightwave-ui-copy-assets".to_string(),
            "lightwaveui-index-copy".to_string(),
            "lightwaveui-config-copy".to_string(),
            "bootstrap-css".to_string(),
        ],
    }
}

fn app_shell_js() -> TaskSpec {
    TaskSpec {
        name: "lightwave-app-ui-js".to_string(),
        src: vec!["./app/app.js".to_string()],
        dedupe: true,
        stages: vec![Stage::Concat {
            output: "lightwave-app-ui.{version}.js".to_string(),
        }],
        dest: "idm/js".to_string(),
    }
}

fn app_js_minify() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-js-minify".to_string(),
        src: vec![
            "./app/src/*.js".to_string(),
            "./app/src/**/*.js".to_string(),
            "./app/src/**/**/*.js".to_string(),
            "./app/src/**/**/**/*.js".to_string(),
        ],
        dedupe: true,
        stages: vec![
            Stage::Concat {
                output: "lightwave-ui.{version}.js".to_string(),
            },
            Stage::MinifyJs,
            Stage::Rename {
                extension: Some(".min.js".to_string()),
                name: None,
            },
        ],
        dest: "idm/js".to_string(),
    }
}

/// Vendor scripts are prefetched into `node_modules/` by the package
/// acquisition step; bundle order is significant and declared file by file.
fn vendor_js_minify() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-vendor-js-minify".to_string(),
        src: vec![
            "./node_modules/jquery/dist/jquery.min.js".to_string(),
            "./node_modules/angular/angular.js".to_string(),
            "./node_modules/angular-bootstrap/ui-bootstrap.min.js".to_string(),
            "./node_modules/angular-bootstrap/ui-bootstrap-tpls.min.js".to_string(),
            "./node_modules/angular-cookies/angular-cookies.js".to_string(),
            "./node_modules/ng-dialog/js/ngDialog.min.js".to_string(),
            "./node_modules/angular-route/angular-route.js".to_string(),
            "./node_modules/jsrsasign/lib/jsrsasign.js".to_string(),
            "./node_modules/jsrsasign/lib/header.js".to_string(),
            "./node_modules/jsrsasign/lib/footer.js".to_string(),
            "./node_modules/jsrsasign/lib/lib.js".to_string(),
        ],
        dedupe: true,
        stages: vec![
            Stage::Concat {
                output: "lightwave-ui-vendor.{version}.js".to_string(),
            },
            Stage::MinifyJs,
            Stage::Rename {
                extension: Some(".min.js".to_string()),
                name: None,
            },
        ],
        dest: "idm/js".to_string(),
    }
}

fn html_minify() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-html-minify".to_string(),
        src: vec![
            "./app/src/**/*.html".to_string(),
            "./app/*.html".to_string(),
            "./app/src/sso/**/*.html".to_string(),
            "./app/src/shared/**/*.html".to_string(),
        ],
        dedupe: true,
        stages: vec![Stage::MinifyHtml],
        dest: "idm".to_string(),
    }
}

fn vendor_css_minify() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-vendor-css-minify".to_string(),
        src: vec![
            "./node_modules/ng-dialog/css/ngDialog.min.css".to_string(),
            "./node_modules/ng-dialog/css/ngDialog-theme-default.min.css".to_string(),
        ],
        dedupe: true,
        stages: vec![
            Stage::Concat {
                output: "lightwave-ui-vendor.{version}.css".to_string(),
            },
            Stage::MinifyCss,
            Stage::Rename {
                extension: Some(".min.css".to_string()),
                name: None,
            },
        ],
        dest: "idm/css".to_string(),
    }
}

fn app_css_minify() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-css-minify".to_string(),
        src: vec!["./app/app.css".to_string()],
        dedupe: true,
        stages: vec![
            Stage::MinifyCss,
            Stage::Rename {
                extension: None,
                name: Some("lightwave-ui.{version}.min.css".to_string()),
            },
        ],
        dest: "idm/css".to_string(),
    }
}

fn copy_assets() -> TaskSpec {
    TaskSpec {
        name: "lightwave-ui-copy-assets".to_string(),
        src: vec![
            "./app/assets/*.png".to_string(),
            "./app/assets/*.gif".to_string(),
        ],
        dedupe: true,
        stages: vec![Stage::Copy],
        dest: "idm/assets".to_string(),
    }
}

fn index_copy() -> TaskSpec {
    TaskSpec {
        name: "lightwaveui-index-copy".to_string(),
        src: vec!["./index.html".to_string()],
        dedupe: true,
        stages: vec![Stage::Copy],
        dest: String::new(),
    }
}

fn config_copy() -> TaskSpec {
    TaskSpec {
        name: "lightwaveui-config-copy".to_string(),
        src: vec!["./config/lightwaveui.json".to_string()],
        dedupe: true,
        stages: vec![Stage::Copy],
        dest: "config".to_string(),
    }
}

/// Already minified upstream; shipped verbatim next to the app styles.
fn bootstrap_css() -> TaskSpec {
    TaskSpec {
        name: "bootstrap-css".to_string(),
        src: vec!["./app/bootstrap.min.css".to_string()],
        dedupe: true,
        stages: vec![Stage::Copy],
        dest: "idm/css".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline;

    #[test]
    fn builtin_manifest_is_internally_consistent() {
        let manifest = manifest();
        pipeline::validate(&manifest).unwrap();
        assert_eq!(manifest.sequence.len(), manifest.tasks.len());
    }

    #[test]
    fn builtin_sequence_matches_declared_order() {
        let manifest = manifest();
        assert_eq!(manifest.sequence[0], "lightwave-app-ui-js");
        assert_eq!(manifest.sequence[9], "bootstrap-css");
        assert_eq!(manifest.version, "1.0.2.0");
    }
}
