use super::*;

#[test]
fn inclusions_group_under_the_terminal_filename_in_order() {
    let mut model = SymbolModel::default();
    let trace = vec![
        ("/usr/include/stdio.h".to_string(), 1),
        ("/usr/include/bits/types.h".to_string(), 2),
        ("/src/util.h".to_string(), 1),
    ];

    record_includes(&mut model, &trace);

    let groups: Vec<&str> = model.headers.keys().map(String::as_str).collect();
    assert_eq!(groups, ["stdio.h", "types.h", "util.h"]);
    assert_eq!(model.headers["stdio.h"][0].path, "/usr/include/stdio.h");
    assert_eq!(model.headers["types.h"][0].level, 2);
}

#[test]
fn the_root_file_at_depth_zero_is_never_entered() {
    let mut model = SymbolModel::default();
    let trace = vec![
        ("/src/module.c".to_string(), 0),
        ("/src/util.h".to_string(), 1),
    ];

    record_includes(&mut model, &trace);

    assert!(!model.headers.contains_key("module.c"));
    assert_eq!(model.headers["util.h"][0].level, 1);
}

#[test]
fn repeated_inclusions_of_one_header_accumulate() {
    let mut model = SymbolModel::default();
    let trace = vec![
        ("/src/util.h".to_string(), 1),
        ("/vendor/util.h".to_string(), 2),
    ];

    record_includes(&mut model, &trace);

    assert_eq!(model.headers["util.h"].len(), 2);
    assert_eq!(model.headers["util.h"][0].level, 1);
    assert_eq!(model.headers["util.h"][1].path, "/vendor/util.h");
}
