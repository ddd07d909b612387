use crate::{
    cli::{Commands, FakeArgs, ModuleArgs, OutputArgs, TestArgs},
    constants::naming,
    descriptor::{load_descriptor, FakeRequest, ModuleDescriptor},
    error::{Error, Result},
    ext::PathExt,
    ioutils::{ensure_writable, make_output_name, write_file},
    template::{Generator, TestVariant},
};
use chrono::Datelike;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// A rendered file and where it goes.
#[derive(Debug)]
pub struct GeneratedFile {
    pub target: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    /// Gets a message describing the write.
    ///
    /// # Arguments
    /// * `target_exists` - Whether the file is being overwritten
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, target_exists: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        if target_exists {
            format!("{prefix}Writing '{}' (overwriting existing file)", self.target.display())
        } else {
            format!("{prefix}Writing '{}'", self.target.display())
        }
    }
}

/// Main CLI runner: builds descriptors, renders, and writes the results.
pub struct Runner {
    generator: Generator,
}

impl Runner {
    pub fn new() -> Result<Self> {
        Ok(Self { generator: Generator::new()? })
    }

    /// Executes one subcommand and returns the files it produced.
    ///
    /// Every target is checked before anything is written, so a refused target
    /// leaves no other file of the same command behind.
    pub fn run(&self, command: Commands) -> Result<Vec<GeneratedFile>> {
        let files = match &command {
            Commands::Header(args) => {
                let descriptor = build_descriptor(args)?;
                let target = module_path(args, naming::HEADER_EXTENSION)?;
                vec![self.header(&descriptor, target)?]
            }
            Commands::Source(args) => {
                let descriptor = build_descriptor(args)?;
                let target = module_path(args, naming::SOURCE_EXTENSION)?;
                vec![self.source(&descriptor, target)?]
            }
            Commands::Module(args) => {
                let descriptor = build_descriptor(args)?;
                let header = module_path(args, naming::HEADER_EXTENSION)?;
                let source =
                    header.with_extension(naming::SOURCE_EXTENSION.trim_start_matches('.'));
                if source == header {
                    return Err(Error::OutputCollision { path: header.display().to_string() });
                }
                vec![self.header(&descriptor, header)?, self.source(&descriptor, source)?]
            }
            Commands::Test(args) => vec![self.test(args)?],
            Commands::Fake(args) => vec![self.fake(args)?],
        };

        let output = command.output();
        if !output.dry_run {
            for file in &files {
                ensure_writable(&file.target, output.force)?;
            }
        }
        for file in &files {
            emit(file, output)?;
        }
        Ok(files)
    }

    fn header(&self, descriptor: &ModuleDescriptor, target: PathBuf) -> Result<GeneratedFile> {
        let descriptor = descriptor.clone().with_include_guard(true);
        let content = self.generator.render_header(&descriptor, target.to_str_checked()?)?;
        Ok(GeneratedFile { target, content })
    }

    fn source(&self, descriptor: &ModuleDescriptor, target: PathBuf) -> Result<GeneratedFile> {
        let descriptor = descriptor.clone().with_include_guard(false);
        let content = self.generator.render_source(&descriptor, target.to_str_checked()?)?;
        Ok(GeneratedFile { target, content })
    }

    fn test(&self, args: &TestArgs) -> Result<GeneratedFile> {
        let module = &args.module;
        let target = make_output_name(
            Path::new(&module.name),
            module.output.outfile.as_deref(),
            module.output.outdir.as_deref(),
            "",
            naming::TEST_EXTENSION,
        )?;
        let variant = if args.full { TestVariant::Full } else { TestVariant::Minimal };
        let content = self.generator.render_test(&build_descriptor(module)?, variant)?;
        Ok(GeneratedFile { target, content })
    }

    fn fake(&self, args: &FakeArgs) -> Result<GeneratedFile> {
        let header = std::fs::read_to_string(&args.header)?;
        let include = match &args.include {
            Some(include) => include.clone(),
            None => args.header.file_name_checked()?.to_string(),
        };

        let (request, skipped) = FakeRequest::from_header(include, &header);
        if !skipped.is_empty() {
            warn!(
                "{} line(s) of '{}' could not be parsed and have no fake",
                skipped.len(),
                args.header.display()
            );
        }

        let target = make_output_name(
            &args.header,
            args.output.outfile.as_deref(),
            args.output.outdir.as_deref(),
            naming::FAKE_PREFIX,
            naming::SOURCE_EXTENSION,
        )?;
        let content = self.generator.render_fake(&request)?;
        Ok(GeneratedFile { target, content })
    }
}

fn module_path(args: &ModuleArgs, extension: &str) -> Result<PathBuf> {
    make_output_name(
        Path::new(&args.name),
        args.output.outfile.as_deref(),
        args.output.outdir.as_deref(),
        "",
        extension,
    )
}

/// Builds the descriptor for one module from the descriptor file and the flags.
///
/// Flags win over the file. The year falls back to the current year; the author
/// has no fallback.
pub fn build_descriptor(args: &ModuleArgs) -> Result<ModuleDescriptor> {
    let mut descriptor = match &args.descriptor {
        Some(path) => load_descriptor(path)?,
        None => ModuleDescriptor::default(),
    };

    descriptor.module_name = args.name.clone();
    if let Some(author) = &args.author {
        descriptor.author = author.clone();
    }
    if let Some(year) = args.year {
        descriptor.year = year;
    }
    if args.project.is_some() {
        descriptor.project_name = args.project.clone();
    }
    if args.copyright.is_some() {
        descriptor.copyright_holder = args.copyright.clone();
    }
    if args.written_by.is_some() {
        descriptor.written_by = args.written_by.clone();
    }

    if descriptor.author.trim().is_empty() {
        return Err(Error::InconsistentDescriptor {
            field: "author".to_string(),
            reason: format!(
                "must be given with --author, {} or the descriptor file",
                crate::constants::AUTHOR_ENV
            ),
        });
    }
    if descriptor.year == 0 {
        descriptor.year = chrono::Local::now().year();
        debug!("No year given, using {}", descriptor.year);
    }

    Ok(descriptor)
}

fn emit(file: &GeneratedFile, output: &OutputArgs) -> Result<()> {
    let target_exists = file.target.exists();
    if output.dry_run {
        info!("{}", file.get_message(target_exists, true));
        print!("{}", file.content);
        return Ok(());
    }

    write_file(&file.content, &file.target)?;
    info!("{}", file.get_message(target_exists, false));
    Ok(())
}

/// Main entry point for CLI execution
pub fn run(command: Commands) -> Result<()> {
    let runner = Runner::new()?;
    let files = runner.run(command)?;
    debug!("Generated {} file(s)", files.len());
    Ok(())
}
