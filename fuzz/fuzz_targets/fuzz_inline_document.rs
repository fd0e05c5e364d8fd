#![no_main]

use libfuzzer_sys::fuzz_target;

use html_inliner::InlineDocument;

fuzz_target!(|data: (&str, &str)| {
    let (css, js) = data;
    let mut document = InlineDocument::new();
    document.push_style(css);
    document.push_script(js);

    // Only the wrapper tag may close its block
    let style = document.style_blocks()[0].to_ascii_lowercase();
    let script = document.script_blocks()[0].to_ascii_lowercase();
    assert_eq!(style.matches("</style").count(), 1);
    assert_eq!(script.matches("</script").count(), 1);
    let _ = document.render();
});
