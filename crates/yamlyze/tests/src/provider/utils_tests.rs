use std::path::Path;

use super::*;

#[test]
fn return_type_splits_off_the_parameter_list() {
    assert_eq!(return_type_of("int (int, char *)"), "int");
    assert_eq!(return_type_of("void ()"), "void");
    assert_eq!(return_type_of("char *(unsigned long)"), "char *");
    assert_eq!(return_type_of("void (void (*)(int))"), "void");
}

#[test]
fn non_function_spellings_pass_through() {
    assert_eq!(return_type_of("int"), "int");
    assert_eq!(return_type_of("struct point"), "struct point");
}

#[test]
fn fundamental_type_sizes_resolve() {
    assert_eq!(type_byte_size("char"), 1);
    assert_eq!(type_byte_size("unsigned short"), 2);
    assert_eq!(type_byte_size("int"), 4);
    assert_eq!(type_byte_size("const unsigned long"), 8);
    assert_eq!(type_byte_size("long double"), 16);
}

#[test]
fn pointers_and_references_are_word_sized() {
    assert_eq!(type_byte_size("char *"), 8);
    assert_eq!(type_byte_size("const struct node *"), 8);
    assert_eq!(type_byte_size("int &"), 8);
}

#[test]
fn unresolvable_spellings_report_the_sentinel() {
    assert_eq!(type_byte_size("struct point"), UNKNOWN_SIZE);
    assert_eq!(type_byte_size("T"), UNKNOWN_SIZE);
    assert_eq!(type_byte_size(""), UNKNOWN_SIZE);
}

#[test]
fn identical_paths_are_equivalent() {
    assert!(paths_equivalent(Path::new("/src/module.c"), Path::new("/src/module.c")));
}

#[test]
fn different_file_names_are_not_equivalent() {
    assert!(!paths_equivalent(Path::new("/src/module.c"), Path::new("/src/other.h")));
}

#[test]
fn distinct_files_sharing_a_basename_are_not_equivalent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let src = dir.path().join("src");
    let vendor = dir.path().join("vendor");
    std::fs::create_dir_all(&src).expect("create src");
    std::fs::create_dir_all(&vendor).expect("create vendor");
    let a = src.join("module.c");
    let b = vendor.join("module.c");
    std::fs::write(&a, "int x;\n").expect("write source");
    std::fs::write(&b, "int y;\n").expect("write source");

    assert!(!paths_equivalent(&a, &b));
}

#[test]
fn canonicalized_spellings_of_one_file_are_equivalent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("module.c");
    std::fs::write(&file, "int x;\n").expect("write source");

    let indirect = dir.path().join(".").join("module.c");
    assert!(paths_equivalent(&file, &indirect));
}
