mod page_tests;
mod site_url_tests;
