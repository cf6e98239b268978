pub mod assets;
pub mod carousel;
pub mod content;
pub mod icons;
pub mod sections;
pub mod showcase;
pub mod skills;
