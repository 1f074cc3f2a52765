/// Embed raw SVG markup in an HTML page that centers it at 90% of the
/// viewport on a transparent background.
pub fn wrap_svg(svg: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body {{ margin: 0; padding: 0; overflow: hidden; background: transparent; display: flex; justify-content: center; align-items: center; height: 100vh; width: 100vw; }}
        svg {{ width: 90%; height: 90%; }}
    </style>
</head>
<body>
{}
</body>
</html>
"#,
        svg
    )
}
