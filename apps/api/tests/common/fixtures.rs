//! Warehouse tables and rows the record source queries run against.

pub const SCHEMA: &[&str] = &[
    "CREATE TABLE sec_report_index (
        cik TEXT NOT NULL,
        company_name TEXT NOT NULL,
        form_type TEXT NOT NULL,
        filed_date DATE NOT NULL,
        fiscal_year INT NOT NULL
    )",
    "CREATE TABLE sec_report_text_attributes (
        sec_document_id TEXT NOT NULL,
        cik TEXT NOT NULL,
        variable_name TEXT NOT NULL,
        period_end_date DATE NOT NULL,
        value TEXT NOT NULL
    )",
    "CREATE TABLE government_contract_index (
        agency TEXT NOT NULL,
        department TEXT NOT NULL,
        original_contract_title TEXT NOT NULL,
        original_contract_description TEXT NOT NULL
    )",
    "CREATE TABLE insurance_plans (
        planname TEXT NOT NULL,
        detail TEXT NOT NULL
    )",
];

pub const SEED: &[&str] = &[
    // Four NVIDIA annual reports, one quarterly report and another company.
    "INSERT INTO sec_report_index (cik, company_name, form_type, filed_date, fiscal_year) VALUES
        ('1045810', 'NVIDIA CORP', '10-K', '2024-02-21', 2023),
        ('1045810', 'NVIDIA CORP', '10-K', '2023-02-24', 2022),
        ('1045810', 'NVIDIA CORP', '10-K', '2022-03-18', 2021),
        ('1045810', 'NVIDIA CORP', '10-K', '2021-02-26', 2020),
        ('1045810', 'NVIDIA CORP', '10-Q', '2023-11-21', 2023),
        ('320193', 'APPLE INC', '10-K', '2023-11-03', 2023)",
    "INSERT INTO sec_report_text_attributes (sec_document_id, cik, variable_name, period_end_date, value) VALUES
        ('0001045810-24-000029', '1045810', '10-K Filing Text', '2024-01-28', 'FY2023 text'),
        ('0001045810-23-000017', '1045810', '10-K Filing Text', '2023-01-29', 'FY2022 text'),
        ('0001045810-22-000036', '1045810', '10-K Filing Text', '2022-01-30', 'FY2021 text'),
        ('0001045810-21-000010', '1045810', '10-K Filing Text', '2021-01-31', 'FY2020 text'),
        ('0001045810-24-000029', '1045810', 'Risk Factors', '2024-01-28', 'risk text'),
        ('0000320193-23-000106', '320193', '10-K Filing Text', '2024-01-28', 'apple text')",
    // Only the 30000-character NAVY row is inside the bounds and fully populated.
    "INSERT INTO government_contract_index
        (agency, department, original_contract_title, original_contract_description)
     SELECT agency, department, 'MAN DIESEL BRAND NAME ENGINE PARTS', repeat('x', len)
     FROM (VALUES
        ('DEPT OF THE ARMY', 'DEPT OF DEFENSE', 20000),
        ('DEPT OF THE AIR FORCE', 'DEPT OF DEFENSE', 28000),
        ('DEPT OF THE NAVY', 'DEPT OF DEFENSE', 30000),
        ('DEPT OF THE NAVY', 'null', 31000),
        ('DEFENSE LOGISTICS AGENCY', 'DEPT OF DEFENSE', 33000)
     ) AS c(agency, department, len)",
    "INSERT INTO insurance_plans (planname, detail) VALUES
        ('filename', 'detail'),
        ('HMO Blue', 'PCP copay $25'),
        ('Access Blue', 'PCP copay $40'),
        ('PPO Saver', 'Deductible $3000')",
];
