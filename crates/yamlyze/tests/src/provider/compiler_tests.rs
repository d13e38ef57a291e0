use super::*;

#[test]
fn include_trace_lines_parse_into_path_and_depth() {
    let stderr = concat!(
        ". /usr/include/stdio.h\n",
        ".. /usr/include/bits/types.h\n",
        "... /usr/include/bits/typesizes.h\n",
        ". /src/util.h\n",
    );

    let trace = parse_include_trace(stderr);

    assert_eq!(trace, [
        ("/usr/include/stdio.h".to_string(), 1),
        ("/usr/include/bits/types.h".to_string(), 2),
        ("/usr/include/bits/typesizes.h".to_string(), 3),
        ("/src/util.h".to_string(), 1),
    ]);
}

#[test]
fn diagnostics_interleaved_in_the_trace_are_ignored() {
    let stderr = concat!(
        ". /src/util.h\n",
        "/src/module.c:4:10: warning: unused variable 'x'\n",
        "Multiple include guards may be useful for:\n",
        "/src/util.h\n",
        ".. /src/inner.h\n",
    );

    let trace = parse_include_trace(stderr);

    assert_eq!(trace, [("/src/util.h".to_string(), 1), ("/src/inner.h".to_string(), 2)]);
}

#[test]
fn empty_trace_yields_no_entries() {
    assert!(parse_include_trace("").is_empty());
}
