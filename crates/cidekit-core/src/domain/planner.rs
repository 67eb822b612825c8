//! Scaffold plan construction.
//!
//! Pure string and path work: decides what to write without writing it.
//! The executor in the application layer materializes the result.

use std::path::Path;

use crate::domain::{
    entities::{ScaffoldMode, ScaffoldPlan},
    error::DomainError,
    paths,
    value_objects::{NewlinePreference, ProjectName},
};

/// Compute the scaffold plan for `mode`.
///
/// Deterministic for fixed inputs; refuses to produce a plan on bad input
/// (empty name, unrelatable build directory) so that no I/O is ever
/// attempted for them.
pub fn build_plan(
    mode: &ScaffoldMode,
    name: &ProjectName,
    newline: NewlinePreference,
) -> Result<ScaffoldPlan, DomainError> {
    match mode {
        ScaffoldMode::NewProject { project_dir } => {
            Ok(plan_new_project(mode, project_dir, name, newline))
        }
        ScaffoldMode::AttachExisting { build_dir, .. } => {
            plan_attach(mode, build_dir, name, newline)
        }
    }
}

fn plan_new_project(
    mode: &ScaffoldMode,
    project_dir: &Path,
    name: &ProjectName,
    newline: NewlinePreference,
) -> ScaffoldPlan {
    let src_dir = project_dir.join("src").join(name.as_str());

    let mut plan = ScaffoldPlan::new(vec![project_dir.to_path_buf()]);
    plan.add_directory(project_dir);
    plan.add_directory(&src_dir);
    plan.add_directory(project_dir.join("build"));

    plan.add_file(
        mode.descriptor_path(name),
        newline.apply(new_project_descriptor(name)),
    );
    plan.add_file(
        project_dir.join("CMakeLists.txt"),
        newline.apply(cmake_lists(name)),
    );
    plan.add_file(src_dir.join("main.cc"), newline.apply(MAIN_CC.to_string()));

    plan
}

fn plan_attach(
    mode: &ScaffoldMode,
    build_dir: &Path,
    name: &ProjectName,
    newline: NewlinePreference,
) -> Result<ScaffoldPlan, DomainError> {
    let cmake_dir = mode.descriptor_dir().to_path_buf();

    let build_rel = paths::relative_path_string(&cmake_dir, build_dir).ok_or_else(|| {
        DomainError::PathNotRelatable {
            from: cmake_dir.display().to_string(),
            to: build_dir.display().to_string(),
        }
    })?;

    let mut plan = ScaffoldPlan::new(vec![cmake_dir, build_dir.to_path_buf()]);
    plan.add_directory(build_dir);
    plan.add_file(
        mode.descriptor_path(name),
        newline.apply(attach_descriptor(name, &build_rel)),
    );

    Ok(plan)
}

// ── Generated file templates ──────────────────────────────────────────────────
//
// All three are byte-reproducible formats consumed by the host environment;
// content is authored with `\n` and converted in one final pass.

fn new_project_descriptor(name: &ProjectName) -> String {
    let bin = name.binary_name();
    format!(
        "name: {name}\n\
         projectCMakeDir: build\n\
         buildDir: build\n\
         buildTarget: {bin}\n\
         runDir: build\n\
         runCmd: ./{bin}\n"
    )
}

/// Descriptor for attach mode. No `buildTarget` line: the real target is
/// never discovered from the CMakeLists.txt, so running falls back to the
/// binary named after the project.
fn attach_descriptor(name: &ProjectName, build_rel: &str) -> String {
    let bin = name.binary_name();
    format!(
        "name: {name}\n\
         projectCMakeDir: {build_rel}\n\
         buildDir: {build_rel}\n\
         runDir: {build_rel}\n\
         runCmd: ./{bin}\n"
    )
}

fn cmake_lists(name: &ProjectName) -> String {
    let bin = name.binary_name();
    let src_subdir = name.as_str();
    format!(
        "cmake_minimum_required(VERSION 3.0)\n\
         \n\
         project({name})\n\
         \n\
         # To set a C++ standard:\n\
         # set(CMAKE_CXX_STANDARD 11)\n\
         \n\
         add_executable({bin}\n\
         \x20 src/{src_subdir}/main.cc\n\
         )\n\
         target_compile_options({bin} PUBLIC\n\
         \x20 \"$<$<COMPILE_LANGUAGE:CXX>:-Wall>\"\n\
         \x20 \";$<$<COMPILE_LANGUAGE:CXX>:-Wextra>\"\n\
         \x20 \";$<$<COMPILE_LANGUAGE:CXX>:-O2>\"\n\
         \x20 \";$<$<COMPILE_LANGUAGE:CXX>:-msse2>\"\n\
         \x20 \";$<$<COMPILE_LANGUAGE:CXX>:-msse3>\"\n\
         )\n"
    )
}

const MAIN_CC: &str = "int main(int argc, char** argv) {\n  \n}\n";
