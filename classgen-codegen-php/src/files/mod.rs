mod class_php;

pub use class_php::ClassFile;
