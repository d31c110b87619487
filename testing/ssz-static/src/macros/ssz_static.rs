#[macro_export]
macro_rules! test_ssz_static {
    ($struct_name:ident) => {
        paste::paste! {
            #[cfg(test)]
            #[allow(non_snake_case)]
            mod [<tests_ $struct_name>] {
                use ssz::Encode;
                use tree_hash::TreeHash;

                use super::*;

                fn check_case(case_dir: &std::path::Path) -> anyhow::Result<()> {
                    let snappy_path = case_dir.join("serialized.ssz_snappy");
                    let expected: $struct_name =
                        utils::read_yaml(&case_dir.join("value.yaml"))?;
                    let roots: utils::Roots = utils::read_yaml(&case_dir.join("roots.yaml"))?;
                    let serialized = utils::read_ssz_snappy_bytes(&snappy_path)?;
                    let decoded: $struct_name = utils::read_ssz_snappy(&snappy_path)?;

                    anyhow::ensure!(decoded == expected, "decoded value mismatch");
                    anyhow::ensure!(expected.as_ssz_bytes() == serialized, "encoding mismatch");
                    anyhow::ensure!(expected.tree_hash_root() == roots.root, "root mismatch");
                    Ok(())
                }

                #[test]
                fn test_ssz_static() {
                    let case_dirs = utils::case_dirs(stringify!($struct_name))
                        .expect("cannot list test cases");
                    assert!(!case_dirs.is_empty(), "no test cases found");

                    // Run every case so one bad vector does not hide the others.
                    let failures: Vec<String> = case_dirs
                        .iter()
                        .filter_map(|case_dir| {
                            check_case(case_dir)
                                .err()
                                .map(|err| format!("{}: {err:#}", case_dir.display()))
                        })
                        .collect();
                    assert!(
                        failures.is_empty(),
                        "failing cases:\n{}",
                        failures.join("\n")
                    );
                }
            }
        }
    };
}
