//! Android project file templates.
//!
//! Each template is fixed text with `{placeholder}` tokens. Rendering is a
//! single pass over the template: substituted values are emitted verbatim and
//! never re-scanned, so a display name or URL containing placeholder syntax
//! cannot corrupt the output. Tokens that match no known placeholder (such as
//! Java or Gradle braces) pass through untouched.

use crate::package_name::PackageName;
use std::path::PathBuf;

/// `AndroidManifest.xml` template.
///
/// Placeholders:
/// - `{package_name}` - sanitized package name segment
/// - `{app_name}` - display name shown under the launcher icon
pub const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.websitetoapp.{package_name}">

    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.ACCESS_NETWORK_STATE" />

    <application
        android:allowBackup="true"
        android:icon="@mipmap/ic_launcher"
        android:label="{app_name}"
        android:theme="@style/AppTheme">
        <activity
            android:name=".MainActivity"
            android:exported="true">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>
    </application>
</manifest>"#;

/// `MainActivity.java` template.
///
/// Placeholders:
/// - `{package_name}` - sanitized package name segment
/// - `{website_url}` - normalized URL loaded into the WebView
pub const MAIN_ACTIVITY: &str = r#"package com.websitetoapp.{package_name};

import android.app.Activity;
import android.os.Bundle;
import android.webkit.WebView;
import android.webkit.WebViewClient;

public class MainActivity extends Activity {
    private WebView webView;

    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.activity_main);

        webView = findViewById(R.id.webview);
        webView.getSettings().setJavaScriptEnabled(true);
        webView.setWebViewClient(new WebViewClient());
        webView.loadUrl("{website_url}");
    }

    @Override
    public void onBackPressed() {
        if (webView.canGoBack()) {
            webView.goBack();
        } else {
            super.onBackPressed();
        }
    }
}"#;

/// `activity_main.xml` layout template. No placeholders.
pub const LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:layout_width="match_parent"
    android:layout_height="match_parent"
    android:orientation="vertical">

    <WebView
        android:id="@+id/webview"
        android:layout_width="match_parent"
        android:layout_height="match_parent" />

</LinearLayout>"#;

/// `styles.xml` template. No placeholders.
pub const STYLES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <style name="AppTheme" parent="android:Theme.Material.Light.DarkActionBar">
        <item name="android:colorPrimary">#2196F3</item>
        <item name="android:colorPrimaryDark">#1976D2</item>
        <item name="android:colorAccent">#FF4081</item>
    </style>
</resources>"#;

/// Application `build.gradle` template.
///
/// Placeholders:
/// - `{package_name}` - sanitized package name segment
pub const APP_BUILD_FILE: &str = r#"apply plugin: 'com.android.application'

android {
    compileSdkVersion 33
    defaultConfig {
        applicationId "com.websitetoapp.{package_name}"
        minSdkVersion 21
        targetSdkVersion 33
        versionCode 1
        versionName "1.0"
    }
    buildTypes {
        release {
            minifyEnabled false
            proguardFiles getDefaultProguardFile('proguard-android.txt'), 'proguard-rules.pro'
        }
    }
}

dependencies {
    implementation 'androidx.appcompat:appcompat:1.6.1'
}"#;

/// Top-level `build.gradle` template. No placeholders.
pub const PROJECT_BUILD_FILE: &str = r#"buildscript {
    repositories {
        google()
        mavenCentral()
    }
    dependencies {
        classpath 'com.android.tools.build:gradle:7.4.2'
    }
}

allprojects {
    repositories {
        google()
        mavenCentral()
    }
}"#;

/// Placeholder values for one generation.
#[derive(Clone, Copy, Debug)]
pub struct TemplateContext<'a> {
    pub package_name: &'a PackageName,
    pub app_name: &'a str,
    pub website_url: &'a str,
}

/// Identifies one file of the generated project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKey {
    Manifest,
    MainActivity,
    Layout,
    Styles,
    AppBuildFile,
    ProjectBuildFile,
}

impl TemplateKey {
    /// All templates, in write order.
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Manifest,
        TemplateKey::MainActivity,
        TemplateKey::Layout,
        TemplateKey::Styles,
        TemplateKey::AppBuildFile,
        TemplateKey::ProjectBuildFile,
    ];

    /// The raw template text.
    pub fn source(self) -> &'static str {
        match self {
            TemplateKey::Manifest => MANIFEST,
            TemplateKey::MainActivity => MAIN_ACTIVITY,
            TemplateKey::Layout => LAYOUT,
            TemplateKey::Styles => STYLES,
            TemplateKey::AppBuildFile => APP_BUILD_FILE,
            TemplateKey::ProjectBuildFile => PROJECT_BUILD_FILE,
        }
    }

    /// Destination path relative to the project root.
    pub fn relative_path(self, package_name: &PackageName) -> PathBuf {
        match self {
            TemplateKey::Manifest => PathBuf::from("app/src/main/AndroidManifest.xml"),
            TemplateKey::MainActivity => PathBuf::from(format!(
                "app/src/main/java/com/websitetoapp/{}/MainActivity.java",
                package_name.as_str()
            )),
            TemplateKey::Layout => PathBuf::from("app/src/main/res/layout/activity_main.xml"),
            TemplateKey::Styles => PathBuf::from("app/src/main/res/values/styles.xml"),
            TemplateKey::AppBuildFile => PathBuf::from("app/build.gradle"),
            TemplateKey::ProjectBuildFile => PathBuf::from("build.gradle"),
        }
    }

    /// Render this template with the given context.
    pub fn render(self, ctx: &TemplateContext<'_>) -> String {
        render(
            self.source(),
            &[
                ("package_name", ctx.package_name.as_str()),
                ("app_name", ctx.app_name),
                ("website_url", ctx.website_url),
            ],
        )
    }
}

/// Substitute `{name}` tokens in a single pass.
///
/// Values are treated as opaque literals. Unknown tokens and bare braces are
/// copied through unchanged.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];

        let known = after.find('}').and_then(|end| {
            let name = &after[1..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });

        match known {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = &after[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(package_name: &'a PackageName, app_name: &'a str, url: &'a str) -> TemplateContext<'a> {
        TemplateContext {
            package_name,
            app_name,
            website_url: url,
        }
    }

    #[test]
    fn app_build_file_carries_application_id() {
        let name = PackageName::sanitize("Demo App");
        let rendered = TemplateKey::AppBuildFile.render(&ctx(&name, "Demo App", "https://example.com"));
        assert!(rendered.contains("com.websitetoapp.demoapp"));
        assert!(rendered.contains("minSdkVersion 21"));
        assert!(rendered.contains("targetSdkVersion 33"));
    }

    #[test]
    fn main_activity_loads_normalized_url() {
        let name = PackageName::sanitize("Demo App");
        let rendered = TemplateKey::MainActivity.render(&ctx(&name, "Demo App", "https://example.com"));
        assert!(rendered.contains("loadUrl(\"https://example.com\")"));
        assert!(rendered.contains("package com.websitetoapp.demoapp;"));
        // Java braces survive rendering
        assert!(rendered.contains("public class MainActivity extends Activity {"));
    }

    #[test]
    fn manifest_labels_display_name() {
        let name = PackageName::sanitize("My App! 2.0");
        let rendered = TemplateKey::Manifest.render(&ctx(&name, "My App! 2.0", "https://example.com"));
        assert!(rendered.contains("android:label=\"My App! 2.0\""));
        assert!(rendered.contains("package=\"com.websitetoapp.myapp20\""));
        assert!(rendered.contains("android.permission.INTERNET"));
        assert!(rendered.contains("android.permission.ACCESS_NETWORK_STATE"));
    }

    #[test]
    fn placeholder_free_templates_render_verbatim() {
        let name = PackageName::sanitize("x");
        let context = ctx(&name, "x", "https://x.com");
        assert_eq!(TemplateKey::Layout.render(&context), LAYOUT);
        assert_eq!(TemplateKey::Styles.render(&context), STYLES);
        assert_eq!(TemplateKey::ProjectBuildFile.render(&context), PROJECT_BUILD_FILE);
    }

    #[test]
    fn substituted_values_are_opaque() {
        // A display name carrying placeholder syntax must land in the output
        // literally instead of being expanded a second time.
        let name = PackageName::sanitize("evil");
        let rendered =
            TemplateKey::Manifest.render(&ctx(&name, "{website_url}", "https://example.com"));
        assert!(rendered.contains("android:label=\"{website_url}\""));
        assert!(!rendered.contains("android:label=\"https://example.com\""));
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let out = render("a {nope} b {x", &[("package_name", "p")]);
        assert_eq!(out, "a {nope} b {x");
    }

    #[test]
    fn relative_paths_follow_package_layout() {
        let name = PackageName::sanitize("Demo App");
        assert_eq!(
            TemplateKey::MainActivity.relative_path(&name),
            PathBuf::from("app/src/main/java/com/websitetoapp/demoapp/MainActivity.java")
        );
        assert_eq!(
            TemplateKey::ProjectBuildFile.relative_path(&name),
            PathBuf::from("build.gradle")
        );
    }
}
