pub mod ssz_static;
