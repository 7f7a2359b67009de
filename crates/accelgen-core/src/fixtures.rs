//! Shared definition documents for unit tests.

/// A compression accelerator exercising every section of the schema.
pub(crate) const SAMPLE_DEFINITION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<repository>
    <template>
        <accelerator_name>Compression</accelerator_name>
        <accelerator_id>accelize_gzip</accelerator_id>
        <example_description>Compress a text file with gzip.</example_description>
    </template>
    <parameters>
        <start>
            <datafile><desc>Not used.</desc></datafile>
            <info_dict/>
        </start>
        <process>
            <file_in><desc>Input file to compress.</desc></file_in>
            <file_out><desc>Compressed output file.</desc></file_out>
            <specific name="level">
                <desc>Compression level.</desc>
                <value><value>1</value><desc>Fastest.</desc></value>
                <value><value>9</value><desc>Best ratio.</desc></value>
            </specific>
        </process>
        <stop/>
    </parameters>
    <output file_out="true">
        <desc>Gzip archive.</desc>
        <specific name="ratio"><desc>Achieved compression ratio.</desc></specific>
    </output>
    <example>
        <start/>
        <process>
            <desc>Compress with default level</desc>
            <file_in>sample_1_1MB.txt</file_in>
            <file_out>sample_1_1MB.txt.gz</file_out>
        </process>
        <process>
            <desc>Compress with best ratio.</desc>
            <specific_output>ratio</specific_output>
            <file_in>sample_1_1MB.txt</file_in>
            <file_out>sample_1_1MB.txt.gz</file_out>
            <specific name="level">9</specific>
        </process>
        <stop/>
    </example>
</repository>
"#;
