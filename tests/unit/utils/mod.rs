mod test_id;
