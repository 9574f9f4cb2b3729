use tl::ParserOptions;

/// Returns the `src` of the last `<img>` tag of `fragment`, in document
/// order, or `None` when the fragment holds no image.
///
/// CommitStrip post content embeds the comic as the last image of the
/// fragment, after the occasional inline avatar or tracking pixel, hence
/// the last-match policy.
pub fn last_image_src(fragment: &str) -> Option<String> {
    let dom = tl::parse(fragment, ParserOptions::default()).ok()?;
    let mut src = None;
    for node_handle in dom.query_selector("img[src]")? {
        let Some(node) = node_handle.get(dom.parser()) else {
            continue;
        };
        let Some(tag) = node.as_tag() else {
            continue;
        };
        let Some(Some(value)) = tag.attributes().get("src") else {
            continue;
        };
        src = Some(value.as_utf8_str().into_owned());
    }
    src
}
